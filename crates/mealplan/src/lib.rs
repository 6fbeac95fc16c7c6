mod alternatives;
mod constraints;
mod exclusion;
mod generate;
mod plan;
mod policy;
mod scoring;

pub use alternatives::*;
pub use constraints::*;
pub use exclusion::*;
pub use generate::*;
pub use plan::*;
pub use policy::*;
pub use scoring::*;
