use crate::rules::Rules::CommandChanged;
use crate::rules::RulesError::CommandCapacityExceeded;
use crate::rules::{Command, Project, RuleId, Rules, RulesError};

impl Project {
    pub fn set_inst(
        &mut self,
        rule: RuleId,
        when_do: usize,
        slot: usize,
        inst: usize,
    ) -> Result<impl FnOnce() -> Vec<Rules> + '_, RulesError> {
        self.set_command(rule, when_do, slot, move |command| command.inst = Some(inst))
    }

    pub fn set_arg(
        &mut self,
        rule: RuleId,
        when_do: usize,
        slot: usize,
        arg: usize,
    ) -> Result<impl FnOnce() -> Vec<Rules> + '_, RulesError> {
        self.set_command(rule, when_do, slot, move |command| command.arg = Some(arg))
    }

    /// Grows the command list with unset commands up to `slot`. Slots past
    /// the last one are rejected before anything changes.
    fn set_command<F>(
        &mut self,
        rule: RuleId,
        when_do: usize,
        slot: usize,
        change: F,
    ) -> Result<impl FnOnce() -> Vec<Rules> + '_, RulesError>
    where
        F: FnOnce(&mut Command) + 'static,
    {
        if slot >= Command::SLOTS {
            return Err(CommandCapacityExceeded {
                rule,
                when_do,
                slot,
            });
        }
        let commands = &mut self.when_do_mut(rule, when_do)?.commands;
        let operation = move || {
            if commands.len() <= slot {
                commands.resize(slot + 1, Command::default());
            }
            let command = &mut commands[slot];
            change(command);
            vec![CommandChanged {
                rule,
                when_do,
                slot,
                command: *command,
            }]
        };
        Ok(operation)
    }
}
