// Resume upload: multipart intake, temp-file lifecycle, extraction → keywords → job search.

pub mod handlers;
pub mod pipeline;
pub mod storage;
