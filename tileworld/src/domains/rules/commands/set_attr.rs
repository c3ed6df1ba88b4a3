use crate::rules::Rules::AttributeChanged;
use crate::rules::RulesError::AttributeNotFound;
use crate::rules::{AttrType, Kind, Project, RuleId, Rules, RulesError};

impl Project {
    pub fn set_attr(
        &mut self,
        rule: RuleId,
        when_do: usize,
        kind: Kind,
        attr: AttrType,
    ) -> Result<impl FnOnce() -> Vec<Rules> + '_, RulesError> {
        let slot = self
            .when_do_mut(rule, when_do)?
            .attrs
            .get_mut(kind.0)
            .ok_or(AttributeNotFound {
                rule,
                when_do,
                kind,
            })?;
        let operation = move || {
            *slot = attr;
            vec![AttributeChanged {
                rule,
                when_do,
                kind,
                attr,
            }]
        };
        Ok(operation)
    }
}
