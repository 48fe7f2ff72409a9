//! Rating-to-quality-tag classification.

/// Display tag derived from a movie's rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityTag {
    UltraHd,
    BluRay,
    FullHd,
    WebDl,
    Hd720,
    Hd,
}

impl QualityTag {
    /// Label as rendered on the card.
    pub fn label(&self) -> &'static str {
        match self {
            QualityTag::UltraHd => "4K",
            QualityTag::BluRay => "BluRay",
            QualityTag::FullHd => "1080p",
            QualityTag::WebDl => "WEB-DL",
            QualityTag::Hd720 => "720p",
            QualityTag::Hd => "HD",
        }
    }
}

/// Map a rating to its ordered quality tags.
///
/// Total over every input: an absent rating classifies like 0. Threshold
/// lower bounds are inclusive, evaluated high to low, first match wins.
/// The returned slices are `'static`, so every render pass sees the same
/// allocation for the same input.
pub fn classify(rating: Option<f64>) -> &'static [QualityTag] {
    let rating = rating.unwrap_or(0.0);
    if rating >= 8.5 {
        &[QualityTag::UltraHd, QualityTag::BluRay]
    } else if rating >= 7.5 {
        &[QualityTag::FullHd, QualityTag::WebDl]
    } else if rating >= 6.0 {
        &[QualityTag::Hd720]
    } else {
        &[QualityTag::Hd]
    }
}
