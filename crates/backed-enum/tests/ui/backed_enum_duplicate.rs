use backed_enum::backed_enum;

backed_enum! {
    pub Status: &'static str {
        OK = "ok",
        OK = "fine",
    }
}

fn main() {}
