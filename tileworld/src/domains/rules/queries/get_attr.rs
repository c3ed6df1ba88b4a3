use crate::rules::RulesError::AttributeNotFound;
use crate::rules::{AttrType, Kind, Project, RuleId, RulesError};

impl Project {
    pub fn get_attr(
        &self,
        rule: RuleId,
        when_do: usize,
        kind: Kind,
    ) -> Result<AttrType, RulesError> {
        self.when_do(rule, when_do)?
            .attrs
            .get(kind.0)
            .copied()
            .ok_or(AttributeNotFound {
                rule,
                when_do,
                kind,
            })
    }

    pub fn get_attrs(&self, rule: RuleId, when_do: usize) -> Result<&[AttrType], RulesError> {
        Ok(self.when_do(rule, when_do)?.attrs.as_slice())
    }
}
