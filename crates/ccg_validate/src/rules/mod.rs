//! Built-in declaration rules.

mod ccg001;
mod ccg002;

pub use ccg001::MustBePartial;
pub use ccg002::MustInheritBehaviour;

use crate::Validator;
use ccg_config::GeneratorConfig;

/// Registers CCG001 and CCG002 with the validator, in code order.
pub fn register_builtin_rules(validator: &mut Validator, config: &GeneratorConfig) {
    validator.register(Box::new(MustBePartial));
    validator.register(Box::new(MustInheritBehaviour::new(
        &config.runtime.behaviour_base,
    )));
}
