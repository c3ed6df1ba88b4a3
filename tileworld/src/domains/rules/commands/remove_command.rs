use crate::rules::Rules::CommandRemoved;
use crate::rules::{Project, RuleId, Rules, RulesError};

impl Project {
    pub fn remove_command(
        &mut self,
        rule: RuleId,
        when_do: usize,
        slot: usize,
    ) -> Result<impl FnOnce() -> Vec<Rules> + '_, RulesError> {
        let commands = &mut self.when_do_mut(rule, when_do)?.commands;
        let operation = move || {
            if slot < commands.len() {
                commands.remove(slot);
                vec![CommandRemoved {
                    rule,
                    when_do,
                    slot,
                }]
            } else {
                vec![]
            }
        };
        Ok(operation)
    }
}
