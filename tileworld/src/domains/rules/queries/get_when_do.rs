use crate::rules::RulesError::WhenDoNotFound;
use crate::rules::{Project, RuleId, RulesError, WhenDo};

impl Project {
    /// Index of the first cell at `col`, `row`, if the rule has one there.
    pub fn get_when_do(
        &self,
        rule: RuleId,
        col: usize,
        row: usize,
    ) -> Result<Option<usize>, RulesError> {
        let index = self
            .get_rule(rule)?
            .when_do
            .iter()
            .position(|when_do| when_do.col == col && when_do.row == row);
        Ok(index)
    }

    pub fn when_do(&self, rule: RuleId, index: usize) -> Result<&WhenDo, RulesError> {
        self.get_rule(rule)?
            .when_do
            .get(index)
            .ok_or(WhenDoNotFound { rule, index })
    }

    pub fn when_do_mut(&mut self, rule: RuleId, index: usize) -> Result<&mut WhenDo, RulesError> {
        self.get_rule_mut(rule)?
            .when_do
            .get_mut(index)
            .ok_or(WhenDoNotFound { rule, index })
    }
}
