use std::fmt;

use serde::Deserialize;

/// 餐厅记录
///
/// 没有 ID，只靠在列表中的位置区分。`rating` 保存评分控件产生的原始文本。
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub cuisine: String,
    #[serde(deserialize_with = "rating_as_text")]
    pub rating: String,
}

impl Restaurant {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
        cuisine: impl Into<String>,
        rating: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
            cuisine: cuisine.into(),
            rating: rating.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Address => &self.address,
            Field::Phone => &self.phone,
            Field::Cuisine => &self.cuisine,
            Field::Rating => &self.rating,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Address => &mut self.address,
            Field::Phone => &mut self.phone,
            Field::Cuisine => &mut self.cuisine,
            Field::Rating => &mut self.rating,
        }
    }
}

/// 种子文件中的评分可能是数字，也可能是字符串
#[derive(Deserialize)]
#[serde(untagged)]
enum RawRating {
    Int(i64),
    Float(f64),
    Text(String),
}

fn rating_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match RawRating::deserialize(deserializer)? {
        RawRating::Int(n) => n.to_string(),
        RawRating::Float(n) => n.to_string(),
        RawRating::Text(s) => s,
    })
}

/// 表单的五个字段，按显示顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Address,
    Phone,
    Cuisine,
    Rating,
}

/// 表单控件的输入类型（对应 HTML input type）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Tel,
    Number { min: i64, max: i64 },
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Address,
        Field::Phone,
        Field::Cuisine,
        Field::Rating,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name:",
            Field::Address => "Address:",
            Field::Phone => "Phone:",
            Field::Cuisine => "Cuisine:",
            Field::Rating => "Rating:",
        }
    }

    pub fn kind(self) -> InputKind {
        match self {
            Field::Phone => InputKind::Tel,
            Field::Rating => InputKind::Number { min: 1, max: 5 },
            _ => InputKind::Text,
        }
    }

    /// 所有控件都是必填
    pub fn required(self) -> bool {
        true
    }

    /// 控件是否允许输入字符 `c`
    pub fn accepts(self, c: char) -> bool {
        match self.kind() {
            InputKind::Number { .. } => {
                c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
            }
            InputKind::Text | InputKind::Tel => !c.is_control(),
        }
    }

    pub fn next(self) -> Option<Field> {
        let idx = self.index();
        Field::ALL.get(idx + 1).copied()
    }

    pub fn prev(self) -> Option<Field> {
        self.index().checked_sub(1).map(|i| Field::ALL[i])
    }

    fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Address => 1,
            Field::Phone => 2,
            Field::Cuisine => 3,
            Field::Rating => 4,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Address => "address",
            Field::Phone => "phone",
            Field::Cuisine => "cuisine",
            Field::Rating => "rating",
        };
        f.write_str(name)
    }
}

/// 餐厅列表（唯一数据源）
///
/// 只增不减。追加时构造新的 Vec 再整体替换，不在原 Vec 上 push。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestaurantList {
    records: Vec<Restaurant>,
}

impl RestaurantList {
    /// 复制 `seed`，列表不与种子共享数据
    pub fn from_seed(seed: &[Restaurant]) -> Self {
        Self {
            records: seed.to_vec(),
        }
    }

    pub fn append(&mut self, record: Restaurant) {
        let next: Vec<Restaurant> = self
            .records
            .iter()
            .cloned()
            .chain(std::iter::once(record))
            .collect();
        self.records = next;
    }

    pub fn as_slice(&self) -> &[Restaurant] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
