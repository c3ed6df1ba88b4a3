#![allow(dead_code)]

use std::collections::HashMap;
use std::fmt::Debug;

use tileworld::rules::{
    AttrType, Kind, MoveDirection, Project, Projection, RuleId, RuleType, Rules, RulesError,
};

pub const FIXED: [&str; 3] = ["grass", "wall", "water"];
pub const MOVABLE: [&str; 3] = ["hero", "boulder", "diamond"];

pub fn assert_debug_eq<T: Debug>(actual: T, expected: T) {
    assert_eq!(format!("{:?}", actual), format!("{:?}", expected));
}

pub struct RulesTestScenario {
    pub project: Project,
    rules: HashMap<String, RuleId>,
    cells: HashMap<String, (RuleId, usize)>,
    current_events: Vec<Rules>,
    current_error: Option<RulesError>,
}

impl RulesTestScenario {
    pub fn new() -> Self {
        Self::with_tiles(&FIXED, &MOVABLE)
    }

    pub fn with_tiles(fixed: &[&str], movable: &[&str]) -> Self {
        Self {
            project: Project::new(fixed.iter().copied(), movable.iter().copied()),
            rules: Default::default(),
            cells: Default::default(),
            current_events: vec![],
            current_error: None,
        }
    }

    pub fn kind(&self, name: &str) -> Kind {
        let tile = self.project.find_tile(name).unwrap().key;
        self.project.get_kind(tile).unwrap()
    }

    pub fn rule(&self, name: &str) -> RuleId {
        *self.rules.get(name).unwrap()
    }

    pub fn cell(&self, name: &str) -> (RuleId, usize) {
        *self.cells.get(name).unwrap()
    }

    pub fn given_rule(
        mut self,
        tile: &str,
        rule_type: RuleType,
        direction: Option<MoveDirection>,
        rule_name: &str,
    ) -> Self {
        let kind = self.kind(tile);
        let (id, operation) = self.project.make_rule(kind, rule_type, direction);
        operation();
        self.rules.insert(rule_name.to_string(), id);
        self
    }

    pub fn given_cell(mut self, rule_name: &str, col: usize, row: usize, cell_name: &str) -> Self {
        let rule = self.rule(rule_name);
        let (index, operation) = self.project.make_when_do(rule, col, row).unwrap();
        operation();
        self.cells.insert(cell_name.to_string(), (rule, index));
        self
    }

    pub fn given_attrs(mut self, cell_name: &str, attrs: &[(&str, AttrType)]) -> Self {
        let (rule, when_do) = self.cell(cell_name);
        for (tile, attr) in attrs {
            let kind = self.kind(tile);
            self.project
                .set_attr(rule, when_do, kind, *attr)
                .unwrap()();
        }
        self
    }

    pub fn given_command(mut self, cell_name: &str, slot: usize, inst: usize, arg: usize) -> Self {
        let (rule, when_do) = self.cell(cell_name);
        self.project.set_inst(rule, when_do, slot, inst).unwrap()();
        self.project.set_arg(rule, when_do, slot, arg).unwrap()();
        self
    }

    fn record(&mut self, result: Result<Vec<Rules>, RulesError>) {
        match result {
            Ok(events) => {
                self.current_events = events;
                self.current_error = None;
            }
            Err(error) => {
                self.current_events = vec![];
                self.current_error = Some(error);
            }
        }
    }

    pub fn when_make_rule(
        mut self,
        tile: &str,
        rule_type: RuleType,
        direction: Option<MoveDirection>,
        rule_name: &str,
    ) -> Self {
        let kind = self.kind(tile);
        let (id, operation) = self.project.make_rule(kind, rule_type, direction);
        let events = operation();
        self.rules.insert(rule_name.to_string(), id);
        self.record(Ok(events));
        self
    }

    pub fn when_remove_rule(mut self, rule_name: &str) -> Self {
        let rule = self.rule(rule_name);
        let result = self.project.remove_rule(rule).map(|operation| operation());
        self.record(result);
        self
    }

    pub fn when_set_kinds(mut self, rule_name: &str, tiles: &[&str]) -> Self {
        let rule = self.rule(rule_name);
        let kinds = tiles.iter().map(|tile| self.kind(tile)).collect();
        let result = self.project.set_kinds(rule, kinds).map(|operation| operation());
        self.record(result);
        self
    }

    pub fn when_set_type(mut self, rule_name: &str, rule_type: RuleType) -> Self {
        let rule = self.rule(rule_name);
        let result = self.project.set_type(rule, rule_type).map(|operation| operation());
        self.record(result);
        self
    }

    pub fn when_set_dir(mut self, rule_name: &str, direction: Option<MoveDirection>) -> Self {
        let rule = self.rule(rule_name);
        let result = self.project.set_dir(rule, direction).map(|operation| operation());
        self.record(result);
        self
    }

    pub fn when_make_cell(mut self, rule_name: &str, col: usize, row: usize, cell_name: &str) -> Self {
        let rule = self.rule(rule_name);
        let result = self
            .project
            .make_when_do(rule, col, row)
            .map(|(index, operation)| (index, operation()));
        match result {
            Ok((index, events)) => {
                self.cells.insert(cell_name.to_string(), (rule, index));
                self.record(Ok(events));
            }
            Err(error) => self.record(Err(error)),
        }
        self
    }

    pub fn when_set_attr(mut self, cell_name: &str, kind: Kind, attr: AttrType) -> Self {
        let (rule, when_do) = self.cell(cell_name);
        let result = self
            .project
            .set_attr(rule, when_do, kind, attr)
            .map(|operation| operation());
        self.record(result);
        self
    }

    pub fn when_set_inst(mut self, cell_name: &str, slot: usize, inst: usize) -> Self {
        let (rule, when_do) = self.cell(cell_name);
        let result = self
            .project
            .set_inst(rule, when_do, slot, inst)
            .map(|operation| operation());
        self.record(result);
        self
    }

    pub fn when_set_arg(mut self, cell_name: &str, slot: usize, arg: usize) -> Self {
        let (rule, when_do) = self.cell(cell_name);
        let result = self
            .project
            .set_arg(rule, when_do, slot, arg)
            .map(|operation| operation());
        self.record(result);
        self
    }

    pub fn when_remove_command(mut self, cell_name: &str, slot: usize) -> Self {
        let (rule, when_do) = self.cell(cell_name);
        let result = self
            .project
            .remove_command(rule, when_do, slot)
            .map(|operation| operation());
        self.record(result);
        self
    }

    pub fn then_events<F>(self, expected_events: F) -> Self
    where
        F: FnOnce(&Self) -> Vec<Rules>,
    {
        if let Some(error) = &self.current_error {
            panic!("Expected events, got error {:?}", error);
        }
        let expected_events = expected_events(&self);
        assert_debug_eq(&self.current_events, &expected_events);
        self
    }

    pub fn then_error<F>(self, expected_error: F) -> Self
    where
        F: FnOnce(&Self) -> RulesError,
    {
        let expected_error = expected_error(&self);
        match &self.current_error {
            Some(error) => assert_debug_eq(error, &expected_error),
            None => panic!(
                "Expected error {:?}, got events {:?}",
                expected_error, self.current_events
            ),
        }
        self
    }

    pub fn then_project<F>(self, check: F) -> Self
    where
        F: FnOnce(&Self, &Project),
    {
        check(&self, &self.project);
        self
    }

    pub fn then_projection<F>(self, cell_name: &str, expected: F) -> Self
    where
        F: FnOnce(&Self) -> Projection,
    {
        let (rule, when_do) = self.cell(cell_name);
        let projection = self.project.project_when_do(rule, when_do).unwrap();
        assert_eq!(projection, expected(&self));
        self
    }
}
