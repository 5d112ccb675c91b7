//! HTTP protocol layer module
//!
//! Response builders shared by the catalog handlers, decoupled from the
//! record types they carry.

pub mod response;

pub use response::{
    build_400_response, build_404_response, build_405_response, build_500_response,
    build_json_response, ResponseBody,
};
