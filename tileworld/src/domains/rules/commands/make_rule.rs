use log::warn;

use crate::rules::Rules::RuleCreated;
use crate::rules::{IdRule, Kind, MoveDirection, Project, Rule, RuleId, RuleType, Rules};

impl Project {
    pub fn make_rule(
        &mut self,
        kind: Kind,
        rule_type: RuleType,
        direction: Option<MoveDirection>,
    ) -> (RuleId, impl FnOnce() -> Vec<Rules> + '_) {
        let id = self.rules_id.one(RuleId);
        let rule = Rule {
            kinds: vec![kind],
            rule_type,
            direction,
            when_do: vec![],
        };
        let operation = move || {
            if rule_type.is_directional() && direction.is_none() {
                warn!("Rule {:?} of {:?} for {:?} created without direction", id, rule_type, kind);
            }
            let events = vec![RuleCreated {
                id,
                kinds: rule.kinds.clone(),
                rule_type,
                direction,
            }];
            self.rules_index.insert(id, self.rules.len());
            self.rules.push(IdRule { id, rule });
            events
        };
        (id, operation)
    }
}
