// Domain model: templates and the parameters they expand against

pub mod parameters;
pub mod template;

pub use parameters::{UriParameters, Value};
pub use template::{Expression, Operator, Segment, Template, VarSpec};
