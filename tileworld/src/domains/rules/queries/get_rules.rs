use crate::rules::{IdRule, Kind, MoveDirection, Project, RuleId, RuleType, RulesError};

impl Project {
    pub fn rules(&self) -> &[IdRule] {
        &self.rules
    }

    pub fn get_rule_ids(&self) -> Vec<RuleId> {
        self.rules.iter().map(|rule| rule.id).collect()
    }

    pub fn get_rules_for_kind(&self, kind: Kind) -> Vec<RuleId> {
        self.rules
            .iter()
            .filter(|rule| rule.rule.kinds.contains(&kind))
            .map(|rule| rule.id)
            .collect()
    }

    /// Narrows `rules` to the given type, and to the given direction unless
    /// the type is resting.
    pub fn get_rules_for_type_dir(
        &self,
        rules: &[RuleId],
        rule_type: RuleType,
        direction: Option<MoveDirection>,
    ) -> Result<Vec<RuleId>, RulesError> {
        let mut result = vec![];
        for id in rules {
            let rule = self.get_rule(*id)?;
            if rule.rule_type == rule_type
                && (rule_type == RuleType::Resting || rule.direction == direction)
            {
                result.push(*id);
            }
        }
        Ok(result)
    }
}
