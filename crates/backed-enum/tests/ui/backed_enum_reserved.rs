use backed_enum::backed_enum;

backed_enum! {
    pub Clash: u8 {
        enumeration = 1,
    }
}

fn main() {}
