use backed_enum::backed_enum;

backed_enum! {
    /// Scheduler priorities.
    pub Priority: u8 {
        LOW = 1,
        NORMAL = 5,
        HIGH = 9,
        /// Shares its backing value with `HIGH`.
        URGENT = 9,
    }
}

backed_enum! {
    pub(crate) Signal: i32 { BELOW = -1, ZERO = 0, ABOVE = 1 }
}

backed_enum! {
    Nothing: i64 {}
}

fn main() {
    assert_eq!(Priority::NORMAL, 5);
    assert_eq!(Priority::ENTRIES.len(), 4);
    assert_eq!(Priority.values().iter().filter(|v| **v == 9).count(), 2);
    assert!(Priority.validate(&9));
    assert!(Priority.parse(&2).is_err());

    assert!(Signal.validate(&Signal::BELOW));
    assert_eq!(Signal.get("ABOVE"), Some(&1));

    assert!(Nothing.is_empty());
    assert!(!Nothing.validate(&0));
}
