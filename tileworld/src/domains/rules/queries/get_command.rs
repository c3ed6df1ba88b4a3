use crate::rules::{Command, Project, RuleId, RulesError};

impl Project {
    pub fn get_commands(&self, rule: RuleId, when_do: usize) -> Result<&[Command], RulesError> {
        Ok(self.when_do(rule, when_do)?.commands.as_slice())
    }

    /// Unset both when the slot holds an unset command and when the list
    /// does not reach that far.
    pub fn get_inst(
        &self,
        rule: RuleId,
        when_do: usize,
        slot: usize,
    ) -> Result<Option<usize>, RulesError> {
        let commands = self.get_commands(rule, when_do)?;
        Ok(commands.get(slot).and_then(|command| command.inst))
    }

    pub fn get_arg(
        &self,
        rule: RuleId,
        when_do: usize,
        slot: usize,
    ) -> Result<Option<usize>, RulesError> {
        let commands = self.get_commands(rule, when_do)?;
        Ok(commands.get(slot).and_then(|command| command.arg))
    }
}
