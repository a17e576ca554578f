macro_rules! netfn {
    ($($name:ident = $value:literal,)*) => {
        /// The network function of an IPMI message.
        ///
        /// Only the request value is stored: the matching response value is
        /// always `request_value() + 1`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum NetFn {
            $($name,)*
            Unknown(u8),
        }

        impl NetFn {
            pub fn request_value(&self) -> u8 {
                match self {
                    $(Self::$name => $value,)*
                    Self::Unknown(v) => *v & !1,
                }
            }
        }

        impl From<u8> for NetFn {
            fn from(value: u8) -> Self {
                match value & !1 {
                    $($value => Self::$name,)*
                    v => Self::Unknown(v),
                }
            }
        }
    };
}

netfn! {
    Chassis = 0x00,
    SensorEvent = 0x04,
    App = 0x06,
    Storage = 0x0A,
    Transport = 0x0C,
}

impl NetFn {
    pub fn response_value(&self) -> u8 {
        self.request_value() | 1
    }
}

impl core::fmt::Display for NetFn {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            NetFn::Unknown(v) => write!(f, "NetFn 0x{v:02X}"),
            known => write!(f, "{known:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_and_response_values() {
        assert_eq!(NetFn::Storage.request_value(), 0x0A);
        assert_eq!(NetFn::Storage.response_value(), 0x0B);
        assert_eq!(NetFn::from(0x0B), NetFn::Storage);
        assert_eq!(NetFn::from(0x05), NetFn::SensorEvent);
        assert_eq!(NetFn::from(0x2C), NetFn::Unknown(0x2C));
        assert_eq!(NetFn::Unknown(0x2D).request_value(), 0x2C);
    }
}
