/// One scoring tier of a shadow war
#[derive(Debug, Clone)]
pub struct TierSettings {
    pub name: &'static str,
    pub points: i32,
}

#[derive(Debug, Clone)]
pub struct WarSettings {
    pub tiers: Vec<TierSettings>,
    pub matches_per_tier: usize,
}

impl Default for WarSettings {
    fn default() -> Self {
        Self {
            tiers: vec![
                TierSettings { name: "EXALTED", points: 8 },
                TierSettings { name: "EMINENT", points: 4 },
                TierSettings { name: "FAMED", points: 2 },
                TierSettings { name: "PROUD", points: 1 },
            ],
            matches_per_tier: 3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub cell_width: u32,
    pub row_height: u32,
    pub header_height: u32,
    pub margin: u32,
    pub min_rows_per_match: u32,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            cell_width: 160,
            row_height: 24,
            header_height: 36,
            margin: 8,
            min_rows_per_match: 4,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub war: WarSettings,
    pub export: ExportSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            war: WarSettings::default(),
            export: ExportSettings::default(),
        }
    }
}
