mod change_rule;
mod designate;
mod make_rule;
mod make_when_do;
mod remove_command;
mod remove_rule;
mod set_attr;
mod set_command;
