use crate::{
    listing::{ListingRow, DEFAULT_PAGE_SIZE},
    model::{destination::DestinationDto, guide::TourGuideDto, trip::TripDto},
};

/// One column of a listing: a header and how to render an entity's cell
#[derive(Clone, Debug)]
pub struct Column<T> {
    pub header: &'static str,
    pub render: fn(&T) -> String,
}

impl<T> Column<T> {
    pub fn new(header: &'static str, render: fn(&T) -> String) -> Self {
        Self { header, render }
    }
}

/// Describes how a kind of entity is listed
#[derive(Clone, Debug)]
pub struct ListingSchema<T> {
    pub title: &'static str,
    pub columns: Vec<Column<T>>,
    pub page_size: usize,
    /// Identifier used for row keys and deletion
    pub key: fn(&T) -> i64,
    pub deletable: bool,
}

impl<T> ListingSchema<T> {
    pub fn render(&self, item: &T) -> ListingRow {
        ListingRow {
            key: (self.key)(item),
            cells: self.columns.iter().map(|c| (c.render)(item)).collect(),
        }
    }
}

pub fn destinations() -> ListingSchema<DestinationDto> {
    ListingSchema {
        title: "Destinations",
        columns: vec![
            Column::new("Name", |d: &DestinationDto| d.name.clone()),
            Column::new("Type", |d: &DestinationDto| d.kind.clone()),
            Column::new("Province", |d: &DestinationDto| d.province.clone()),
            Column::new("District", |d: &DestinationDto| d.district.clone()),
            Column::new("Climate", |d: &DestinationDto| d.climate.clone()),
            Column::new("Activities", |d: &DestinationDto| d.activities.join(", ")),
        ],
        page_size: DEFAULT_PAGE_SIZE,
        key: |d: &DestinationDto| d.id,
        deletable: true,
    }
}

pub fn trips() -> ListingSchema<TripDto> {
    ListingSchema {
        title: "Trips",
        columns: vec![
            Column::new("Trip", |t: &TripDto| t.headline()),
            Column::new("Tourist", |t: &TripDto| {
                t.tourist_name
                    .clone()
                    .unwrap_or_else(|| format!("Tourist #{}", t.tourist_id))
            }),
            Column::new("Country", |t: &TripDto| t.tourist_country.clone()),
            Column::new("Start", |t: &TripDto| {
                t.start_date
                    .map_or_else(|| "N/A".to_string(), |d| d.to_string())
            }),
            Column::new("Days", |t: &TripDto| t.number_of_days.to_string()),
            Column::new("Payment", |t: &TripDto| format!("{:.2}", t.trip_payment)),
            Column::new("Status", |t: &TripDto| t.trip_status.to_string()),
        ],
        page_size: DEFAULT_PAGE_SIZE,
        key: |t: &TripDto| t.id,
        deletable: false,
    }
}

pub fn tour_guides() -> ListingSchema<TourGuideDto> {
    ListingSchema {
        title: "Tour Guides",
        columns: vec![
            Column::new("Name", |g: &TourGuideDto| g.name.clone()),
            Column::new("License", |g: &TourGuideDto| g.license_number.clone()),
            Column::new("NIC", |g: &TourGuideDto| g.nic.clone()),
            Column::new("Telephone", |g: &TourGuideDto| g.telephone.clone()),
            Column::new("Email", |g: &TourGuideDto| g.email.clone().unwrap_or_default()),
            Column::new("Reviews", |g: &TourGuideDto| g.review_count.to_string()),
        ],
        page_size: DEFAULT_PAGE_SIZE,
        key: |g: &TourGuideDto| g.id,
        deletable: true,
    }
}
