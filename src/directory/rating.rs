/// Number of stars a rating is drawn with
pub const TOTAL_STARS: u8 = 5;

/// Star breakdown of a rating out of [`TOTAL_STARS`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarRating {
    /// Break a score into full, half, and empty stars.
    ///
    /// Full stars are the whole part of the score, a single half star is drawn for any
    /// non-zero fraction, and the rest are empty. Scores are clamped to `0..=5`; a
    /// non-finite score draws no stars.
    pub fn from_score(score: f32) -> Self {
        let score = if score.is_finite() {
            score.clamp(0.0, TOTAL_STARS as f32)
        } else {
            0.0
        };

        let full = score.floor() as u8;
        let half = score.fract() > 0.0;
        let empty = TOTAL_STARS - full - half as u8;

        Self { full, half, empty }
    }
}

/// What the directory shows for a guide's reputation
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Reputation {
    Rated { stars: StarRating, score: f32, reviews: u32 },
    Unrated { reviews: u32 },
}

impl Reputation {
    /// Review counts are never turned into stars; only a real rating is
    pub fn new(rating: Option<f32>, review_count: u32) -> Self {
        match rating {
            Some(score) => Self::Rated {
                stars: StarRating::from_score(score),
                score,
                reviews: review_count,
            },
            None => Self::Unrated {
                reviews: review_count,
            },
        }
    }

    pub fn review_label(&self) -> String {
        let reviews = match self {
            Self::Rated { reviews, .. } | Self::Unrated { reviews } => *reviews,
        };

        match reviews {
            0 => "No reviews yet".to_string(),
            1 => "1 review".to_string(),
            n => format!("{} reviews", n),
        }
    }
}
