use serde::{Deserialize, Serialize};

// Data structures for the inbound client search request.
// Field names follow the client contract; aliases cover the capitalised
// spellings some clients send.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchRoom {
    #[serde(rename = "Room", alias = "room")]
    pub room: u32,
    #[serde(rename = "adult", alias = "Adult")]
    pub adult: u32,
    #[serde(rename = "child", alias = "Child")]
    pub child: u32,
    #[serde(rename = "tracker_id", alias = "TrackerID", alias = "trackerId")]
    pub tracker_id: String,
    #[serde(rename = "childAge", alias = "ChildAge")]
    pub child_age: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct HotelSearchRequest {
    #[serde(alias = "Country")]
    pub country: String,
    #[serde(rename = "checkinDate", alias = "CheckinDate")]
    pub checkin_date: String,
    #[serde(rename = "checkoutDate", alias = "CheckoutDate")]
    pub checkout_date: String,
    #[serde(rename = "searchRooms", alias = "SearchRooms")]
    pub search_rooms: Vec<SearchRoom>,
    #[serde(rename = "hotelcode", alias = "hotelCode", alias = "HotelCode")]
    pub hotel_code: String,
    // Not forwarded to the supplier
    #[serde(alias = "Nationality")]
    pub nationality: String,
    #[serde(rename = "mealOptions", alias = "MealOptions")]
    pub meal_options: String,
    #[serde(rename = "tracker_id", alias = "TrackerID", alias = "trackerId")]
    pub tracker_id: String,
    #[serde(rename = "chepeastRoomOnly", alias = "ChepeastRoomOnly")]
    pub cheapest_room_only: bool,
}
