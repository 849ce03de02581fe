use time::{Date, OffsetDateTime, UtcOffset};

pub struct Config {
    pub hero_image: &'static str,
    pub loading_delay_ms: u32,
    pub frame_interval_ms: u32,
    pub carousel_interval_ms: u32,
    pub carousel_per_view: usize,
    pub particle_count: usize,
    pub scene_seed: u64,
    /// The school's local offset from UTC (WIB).
    pub utc_offset_hours: i8,
    pub export_scale: f64,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            hero_image: "https://images.pexels.com/photos/1752757/pexels-photo-1752757.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
            loading_delay_ms: 2_500,
            frame_interval_ms: 33,
            carousel_interval_ms: 3_500,
            carousel_per_view: 3,
            particle_count: 260,
            scene_seed: 9,
            utc_offset_hours: 7,
            export_scale: 2.0,
        }
    }

    pub fn local_now(&self) -> OffsetDateTime {
        let offset = UtcOffset::from_hms(self.utc_offset_hours, 0, 0).unwrap_or(UtcOffset::UTC);
        OffsetDateTime::now_utc().to_offset(offset)
    }

    pub fn today(&self) -> Date {
        self.local_now().date()
    }
}

pub const CONFIG: Config = Config::new();
