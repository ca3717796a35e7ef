use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::SerializeMap};
use serde_json::Value;

/// One gallery entry from `galleries.json`. Fields with an unexpected JSON type
/// are read as absent so a single odd record never fails the whole load.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GalleryRecord {
    #[serde(default, deserialize_with = "string_only")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "array_items")]
    pub tags: Vec<Value>,
    #[serde(default, deserialize_with = "truthy_scalar")]
    pub posted: Option<String>,
    #[serde(default, rename = "favTime", deserialize_with = "string_only")]
    pub fav_time: Option<String>,
}

impl GalleryRecord {
    pub fn string_tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().filter_map(Value::as_str)
    }

    pub fn category(&self) -> Option<Category> {
        self.category.as_deref().and_then(Category::from_label)
    }
}

fn string_only<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        _ => None,
    })
}

fn array_items<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Value>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => Vec::new(),
    })
}

// Numbers are accepted alongside strings; a numeric zero is falsy and dropped.
fn truthy_scalar<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) if !text.is_empty() => Some(text),
        Value::Number(number) if number.as_f64() != Some(0.0) => Some(number.to_string()),
        _ => None,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Doujinshi,
    Manga,
    ArtistCg,
    GameCg,
    Western,
    NonH,
    ImageSet,
    Cosplay,
    AsianPorn,
    Misc,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Doujinshi,
        Category::Manga,
        Category::ArtistCg,
        Category::GameCg,
        Category::Western,
        Category::NonH,
        Category::ImageSet,
        Category::Cosplay,
        Category::AsianPorn,
        Category::Misc,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Doujinshi => "Doujinshi",
            Category::Manga => "Manga",
            Category::ArtistCg => "Artist CG",
            Category::GameCg => "Game CG",
            Category::Western => "Western",
            Category::NonH => "Non-H",
            Category::ImageSet => "Image Set",
            Category::Cosplay => "Cosplay",
            Category::AsianPorn => "Asian Porn",
            Category::Misc => "Misc",
        }
    }

    /// Exact, case-sensitive match against the fixed labels.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.label() == label)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Per-label counters, serialized as a map in the fixed label order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts([u64; 10]);

impl CategoryCounts {
    pub fn get(&self, category: Category) -> u64 {
        self.0[category.index()]
    }

    pub fn increment(&mut self, category: Category) {
        let slot = &mut self.0[category.index()];
        *slot = slot.saturating_add(1);
    }

    pub fn sum(&self) -> u64 {
        self.0.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, u64)> + '_ {
        Category::ALL.into_iter().map(|category| (category, self.get(category)))
    }
}

impl Serialize for CategoryCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::ALL.len()))?;
        for (category, count) in self.iter() {
            map.serialize_entry(category.label(), &count)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryStats {
    pub total_count: u64,
    pub categories: CategoryCounts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagType {
    Artist,
    Other,
    Female,
    Male,
    Character,
    Parody,
}

impl TagType {
    pub const ALL: [TagType; 6] = [
        TagType::Artist,
        TagType::Other,
        TagType::Female,
        TagType::Male,
        TagType::Character,
        TagType::Parody,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TagType::Artist => "artist",
            TagType::Other => "other",
            TagType::Female => "female",
            TagType::Male => "male",
            TagType::Character => "character",
            TagType::Parody => "parody",
        }
    }

    pub fn prefix(self) -> String {
        format!("{}:", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagStat {
    pub tag: String,
    pub namespace: String,
    pub value: String,
    pub count: u64,
    pub tag_cn: String,
    pub intro: String,
    pub links: String,
}

/// Ranked tag lists keyed by type, serialized in `TagType::ALL` order.
#[derive(Debug, Clone, Default)]
pub struct TagsByType(Vec<(TagType, Vec<TagStat>)>);

impl TagsByType {
    pub fn insert(&mut self, tag_type: TagType, stats: Vec<TagStat>) {
        match self.0.iter_mut().find(|(existing, _)| *existing == tag_type) {
            Some((_, slot)) => *slot = stats,
            None => self.0.push((tag_type, stats)),
        }
    }

    pub fn get(&self, tag_type: TagType) -> &[TagStat] {
        self.0
            .iter()
            .find(|(existing, _)| *existing == tag_type)
            .map(|(_, stats)| stats.as_slice())
            .unwrap_or(&[])
    }
}

impl Serialize for TagsByType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(TagType::ALL.len()))?;
        for tag_type in TagType::ALL {
            map.serialize_entry(tag_type.as_str(), self.get(tag_type))?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterlyPoint {
    pub quarter: String,
    pub posted_count: u64,
    pub fav_time_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatmapCell {
    pub x: u32,
    pub y: u32,
    pub v: u64,
    pub d: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Heatmap {
    pub data: Vec<HeatmapCell>,
    pub max_value: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    pub generated_at: String,
    pub stats: CategoryStats,
    pub tags: TagsByType,
    pub quarterly: Vec<QuarterlyPoint>,
    pub heatmap: Heatmap,
}
