use crate::rules::Rules;

/// Events produced by one editing step, ready to leave the registry.
#[derive(Debug, Default, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub struct ChangeSet {
    pub events: Vec<Rules>,
}

impl ChangeSet {
    pub fn push(&mut self, events: Vec<Rules>) {
        self.events.extend(events);
    }

    pub fn as_bytes(&self) -> Result<Vec<u8>, bincode::error::EncodeError> {
        let config = bincode::config::standard();
        bincode::encode_to_vec(self, config)
    }

    #[inline]
    pub fn from_bytes(data: &[u8]) -> Result<ChangeSet, bincode::error::DecodeError> {
        let config = bincode::config::standard();
        let (changes, _) = bincode::decode_from_slice(data, config)?;
        Ok(changes)
    }
}
