use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// Ids are chosen by the client when the book is added and never change afterwards
pub type BookId = String;

#[derive(Debug, Default, Clone, Serialize, Deserialize, Eq, PartialEq, Apiv2Schema)]
/// Book record as exchanged with the remote book api
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub category: String,
    pub isbn: String,
    pub year: i32,
    pub copies: u32,
}
