use crate::rules::RulesError::RuleNotFound;
use crate::rules::{Kind, MoveDirection, Project, Rule, RuleId, RuleType, RulesError};

impl Project {
    #[inline]
    pub fn index_rule(&self, id: RuleId) -> Result<usize, RulesError> {
        self.rules_index
            .get(&id)
            .copied()
            .ok_or(RuleNotFound { id })
    }

    #[inline]
    pub fn get_rule(&self, id: RuleId) -> Result<&Rule, RulesError> {
        let index = self.index_rule(id)?;
        Ok(&self.rules[index].rule)
    }

    /// Mutating the rule in place keeps it reachable under the same id.
    #[inline]
    pub fn get_rule_mut(&mut self, id: RuleId) -> Result<&mut Rule, RulesError> {
        let index = self.index_rule(id)?;
        Ok(&mut self.rules[index].rule)
    }

    pub fn get_kinds(&self, id: RuleId) -> Result<&[Kind], RulesError> {
        Ok(self.get_rule(id)?.kinds.as_slice())
    }

    pub fn get_type(&self, id: RuleId) -> Result<RuleType, RulesError> {
        Ok(self.get_rule(id)?.rule_type)
    }

    pub fn get_dir(&self, id: RuleId) -> Result<Option<MoveDirection>, RulesError> {
        Ok(self.get_rule(id)?.direction)
    }
}
