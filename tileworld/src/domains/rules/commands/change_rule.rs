use log::warn;

use crate::rules::Rules::{DirectionChanged, KindsChanged, TypeChanged};
use crate::rules::{Kind, MoveDirection, Project, RuleId, RuleType, Rules, RulesError};

impl Project {
    pub fn set_kinds(
        &mut self,
        id: RuleId,
        kinds: Vec<Kind>,
    ) -> Result<impl FnOnce() -> Vec<Rules> + '_, RulesError> {
        let rule = self.get_rule_mut(id)?;
        let operation = move || {
            let events = vec![KindsChanged {
                rule: id,
                kinds: kinds.clone(),
            }];
            rule.kinds = kinds;
            events
        };
        Ok(operation)
    }

    pub fn set_type(
        &mut self,
        id: RuleId,
        rule_type: RuleType,
    ) -> Result<impl FnOnce() -> Vec<Rules> + '_, RulesError> {
        let rule = self.get_rule_mut(id)?;
        let operation = move || {
            rule.rule_type = rule_type;
            vec![TypeChanged { rule: id, rule_type }]
        };
        Ok(operation)
    }

    /// Direction and type are not cross-checked, the editor keeps them
    /// consistent.
    pub fn set_dir(
        &mut self,
        id: RuleId,
        direction: Option<MoveDirection>,
    ) -> Result<impl FnOnce() -> Vec<Rules> + '_, RulesError> {
        let rule = self.get_rule_mut(id)?;
        let operation = move || {
            if rule.rule_type.is_directional() && direction.is_none() {
                warn!("Direction of {:?} rule {:?} cleared", rule.rule_type, id);
            }
            rule.direction = direction;
            vec![DirectionChanged {
                rule: id,
                direction,
            }]
        };
        Ok(operation)
    }
}
