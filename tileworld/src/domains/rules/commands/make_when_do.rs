use crate::rules::Rules::WhenDoCreated;
use crate::rules::{Project, RuleId, Rules, RulesError, WhenDo};

impl Project {
    /// Appends a cell without looking for an existing one at the same
    /// coordinate, lookups only ever see the first.
    pub fn make_when_do(
        &mut self,
        id: RuleId,
        col: usize,
        row: usize,
    ) -> Result<(usize, impl FnOnce() -> Vec<Rules> + '_), RulesError> {
        let kinds = self.kinds_count();
        let rule = self.get_rule_mut(id)?;
        let index = rule.when_do.len();
        let operation = move || {
            rule.when_do.push(WhenDo::new(col, row, kinds));
            vec![WhenDoCreated {
                rule: id,
                index,
                col,
                row,
            }]
        };
        Ok((index, operation))
    }
}
