use backed_enum::backed_enum;

backed_enum! {
    pub Status: &'static str {
        OK = "ok",
        FAILED = 1,
    }
}

fn main() {}
