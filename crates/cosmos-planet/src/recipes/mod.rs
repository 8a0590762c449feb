//! Texture recipes, one module per body type.

pub(crate) mod desert;
pub(crate) mod furnace;
pub(crate) mod ice;
pub(crate) mod jovian;
pub(crate) mod jungle;
pub(crate) mod ocean;
pub(crate) mod rocky;
pub(crate) mod toxic;
pub(crate) mod vital;
