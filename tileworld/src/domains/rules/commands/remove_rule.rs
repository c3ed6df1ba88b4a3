use log::info;

use crate::rules::Rules::RuleRemoved;
use crate::rules::{Project, RuleId, Rules, RulesError};

impl Project {
    /// Storage is compacted, but the id stays burned: the sequence never
    /// hands it out again.
    pub fn remove_rule(
        &mut self,
        id: RuleId,
    ) -> Result<impl FnOnce() -> Vec<Rules> + '_, RulesError> {
        let position = self.index_rule(id)?;
        let operation = move || {
            self.rules.remove(position);
            self.rules_index.remove(&id);
            for (index, rule) in self.rules.iter().enumerate().skip(position) {
                self.rules_index.insert(rule.id, index);
            }
            info!("Rule {:?} removed, {} rules left", id, self.rules.len());
            vec![RuleRemoved { id }]
        };
        Ok(operation)
    }
}
