use serde::{Deserialize, Serialize};

// Data structures for the supplier availability request
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRequest {
    pub stay: Stay,
    pub occupancies: Vec<Occupancy>,
    pub hotels: SupplierHotels,
    pub filter: Filter,
    pub daily_rate: bool,
    pub platform: String,
    pub source_market: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boards: Option<Boards>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Stay {
    #[serde(rename = "checkIn")]
    pub check_in: String,
    #[serde(rename = "checkOut")]
    pub check_out: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct SupplierHotels {
    #[serde(rename = "hotel")]
    pub hotel: Vec<i64>,
}

// Both limits are absent unless the client asked for the cheapest room only
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rooms: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rates_per_room: Option<u32>,
    pub payment_type: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Boards {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub board: Vec<String>,
    pub included: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Occupancy {
    pub rooms: u32,
    pub adults: u32,
    pub children: u32,
    pub paxes: Vec<Pax>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum PaxType {
    #[serde(rename = "AD")]
    Adult,
    #[serde(rename = "CH")]
    Child,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Pax {
    #[serde(rename = "type")]
    pub pax_type: PaxType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

impl Pax {
    pub fn adult() -> Self {
        Self {
            pax_type: PaxType::Adult,
            age: None,
        }
    }

    pub fn child(age: u32) -> Self {
        Self {
            pax_type: PaxType::Child,
            age: Some(age),
        }
    }
}

// Envelope returned to the client: the serialized supplier request plus the
// serialized (tracker-stamped) room list
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct CommonResp {
    pub supplier_request: String,
    pub room_info: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pax_serialization() {
        assert_eq!(
            serde_json::to_string(&Pax::adult()).unwrap(),
            r#"{"type":"AD"}"#
        );
        assert_eq!(
            serde_json::to_string(&Pax::child(7)).unwrap(),
            r#"{"type":"CH","age":7}"#
        );
    }

    #[test]
    fn test_filter_without_limits_omits_them() {
        let filter = Filter {
            payment_type: "AT_WEB".to_string(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&filter).unwrap(),
            r#"{"paymentType":"AT_WEB"}"#
        );

        let filter = Filter {
            max_rooms: Some(2),
            max_rates_per_room: Some(1),
            payment_type: "AT_WEB".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&filter).unwrap(),
            r#"{"maxRooms":2,"maxRatesPerRoom":1,"paymentType":"AT_WEB"}"#
        );
    }

    #[test]
    fn test_availability_request_field_names() {
        let request = AvailabilityRequest {
            stay: Stay {
                check_in: "2024-05-01".to_string(),
                check_out: "2024-05-05".to_string(),
            },
            occupancies: vec![],
            hotels: SupplierHotels { hotel: vec![1] },
            filter: Filter {
                payment_type: "AT_WEB".to_string(),
                ..Default::default()
            },
            daily_rate: true,
            platform: "P".to_string(),
            source_market: "ES".to_string(),
            boards: None,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"stay":{"checkIn":"2024-05-01","checkOut":"2024-05-05"},"occupancies":[],"hotels":{"hotel":[1]},"filter":{"paymentType":"AT_WEB"},"dailyRate":true,"platform":"P","sourceMarket":"ES"}"#
        );
    }

    #[test]
    fn test_empty_board_list_keeps_included_flag() {
        let boards = Boards {
            board: vec![],
            included: true,
        };
        assert_eq!(
            serde_json::to_string(&boards).unwrap(),
            r#"{"included":true}"#
        );
    }
}
