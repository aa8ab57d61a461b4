use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($id_type:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Serialize,
            Deserialize,
            sqlx::Type,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $id_type(i32);

        impl $id_type {
            pub fn new(value: i32) -> Self {
                Self(value)
            }

            pub fn raw(self) -> i32 {
                self.0
            }
        }

        impl std::fmt::Display for $id_type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl std::str::FromStr for $id_type {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i32>().map(Self)
            }
        }
    };
}

define_id!(UserId);
define_id!(EnrollmentId);
define_id!(TicketTypeId);
define_id!(TicketId);
define_id!(HotelId);
define_id!(RoomId);
define_id!(BookingId);
define_id!(PaymentId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_and_parse() {
        let id = BookingId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!("42".parse::<BookingId>().ok(), Some(id));
        assert!("abc".parse::<BookingId>().is_err());
    }

    #[test]
    fn test_id_serializes_as_bare_integer() {
        #[derive(serde::Serialize)]
        struct Res {
            id: UserId,
        }
        let json = serde_json::to_string(&Res { id: UserId::new(7) }).unwrap();
        assert_eq!(json, r#"{"id":7}"#);
    }
}
