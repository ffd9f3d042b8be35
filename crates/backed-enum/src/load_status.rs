use backed_enum_derive::backed_enum;

backed_enum! {
    /// States of a loading operation, exchanged with external systems as lowercase strings.
    ///
    /// ```rust
    /// use backed_enum::LoadStatus;
    ///
    /// assert_eq!(LoadStatus::LOADING, "loading");
    /// assert!(LoadStatus.validate("success"));
    /// assert!(LoadStatus.parse("done").is_err());
    /// ```
    pub LoadStatus: &'static str {
        /// Nothing has been requested yet.
        IDLE = "idle",
        /// A request is in flight.
        LOADING = "loading",
        /// The last request failed.
        ERROR = "error",
        /// The last request completed.
        SUCCESS = "success",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EnumError;

    #[test]
    fn test_named_accessors() {
        assert_eq!(LoadStatus::IDLE, "idle");
        assert_eq!(LoadStatus::ERROR, "error");
        assert_eq!(LoadStatus.get("SUCCESS"), Some(&LoadStatus::SUCCESS));
    }

    #[test]
    fn test_enumeration_is_shared() {
        assert!(std::ptr::eq(LoadStatus::enumeration(), &*LoadStatus));
        assert_eq!(LoadStatus.len(), LoadStatus::ENTRIES.len());
    }

    #[test]
    fn test_parse_rejects_unknown_status() {
        let err = LoadStatus.parse("IDLE").unwrap_err();
        assert!(matches!(err, EnumError::InvalidValue { .. }));
    }
}
