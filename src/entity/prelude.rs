//! Entity re-exports with disambiguated names

pub use super::academics::{
    ActiveModel as AcademicsActiveModel, Entity as StudentAcademics, Model as AcademicsModel,
};
pub use super::events::{
    ActiveModel as EventActiveModel, Entity as StudentEvents, Model as EventModel,
};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
pub use super::values::{
    ActiveModel as ValueActiveModel, Entity as StudentValues, Model as ValueModel,
};
