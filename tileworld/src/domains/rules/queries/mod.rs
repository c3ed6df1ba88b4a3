mod get_attr;
mod get_command;
mod get_rule;
mod get_rules;
mod get_tile;
mod get_when_do;
