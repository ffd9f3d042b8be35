use backed_enum::backed_enum;

backed_enum! {
    pub Code: u8 {
        OK = 1 + 1,
    }
}

fn main() {}
