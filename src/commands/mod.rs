pub mod cleanup;
pub mod dashboard;
pub mod dep;
pub mod doc;
pub mod docker;
pub mod env;
pub mod helpinfo;
pub mod mkdoc;
pub mod scaffold;
pub mod tf;
