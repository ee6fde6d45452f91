// Copyright (C) 2018 Stephane Raux. Distributed under the MIT license.

use serde::Serializer;
use serde::ser::SerializeSeq;
use serde_derive::{Serialize};
use std::error::Error as StdError;
use std::fmt::{Display, self};

#[derive(Debug, Serialize)]
pub struct Error {
    kind: ErrorKind,
    #[serde(serialize_with = "serialize_cause")]
    cause: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new<E>(kind: ErrorKind, cause: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        let cause = Some(cause.into());
        Error {kind, cause}
    }

    pub fn kind(&self) -> &ErrorKind {&self.kind}
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum ErrorKind {
    BadConfig,
    BadRequest,
    BadUrl,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ErrorKind::BadConfig => f.write_str("Bad configuration"),
            ErrorKind::BadRequest => f.write_str("Bad map request"),
            ErrorKind::BadUrl => f.write_str("Bad map URL"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_ref().map(|e| &**e as &dyn StdError)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {kind, cause: None}
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Error {
        Error::new(ErrorKind::BadUrl, e)
    }
}

fn serialize_cause<S>(e: &Option<Box<dyn StdError + Send + Sync>>, out: S)
    -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut seq = out.serialize_seq(None)?;
    let mut e = e.as_ref().map(|e| &**e as &dyn StdError);
    while let Some(cause) = e {
        seq.serialize_element(&cause.to_string())?;
        e = cause.source();
    }
    seq.end()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cause_chain_serializes_as_messages() {
        let e = Error::new(ErrorKind::BadRequest, "missing size");
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["kind"], "BadRequest");
        assert_eq!(json["cause"], serde_json::json!(["missing size"]));
    }

    #[test]
    fn kind_without_cause_has_no_source() {
        let e = Error::from(ErrorKind::BadConfig);
        assert!(e.source().is_none());
        assert_eq!(e.to_string(), "Bad configuration");
    }

    #[test]
    fn url_errors_are_bad_urls() {
        let e = Error::from(url::Url::parse("not a url").unwrap_err());
        assert_eq!(e.kind(), &ErrorKind::BadUrl);
    }
}
