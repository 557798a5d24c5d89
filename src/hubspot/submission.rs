//! src/hubspot/submission.rs
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq)]
pub struct Field<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

/// Request body of the forms integration endpoint.
#[derive(Debug, Serialize)]
pub struct Submission<'a> {
    pub fields: Vec<Field<'a>>,
}

impl<'a> Submission<'a> {
    pub fn builder() -> SubmissionBuilder<'a> {
        SubmissionBuilder::new()
    }
}

#[derive(Default)]
pub struct SubmissionBuilder<'a> {
    fields: Vec<Field<'a>>,
}

impl<'a> SubmissionBuilder<'a> {
    pub fn new() -> Self {
        Self { fields: vec![] }
    }

    pub fn field(mut self, name: &'a str, value: &'a str) -> Self {
        self.fields.push(Field { name, value });
        self
    }

    pub fn build(self) -> Submission<'a> {
        Submission {
            fields: self.fields,
        }
    }
}
