//! 회원가입 폼의 국가/주/도시 목록
//!
//! 주 목록은 국가와 무관하게 동일하며, 도시는 일부 주에만 정의되어 있습니다.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// 기본 선택 국가
pub const DEFAULT_COUNTRY: &str = "India";

static COUNTRIES: [&str; 5] = ["India", "USA", "UK", "Canada", "Australia"];

static STATES: [&str; 8] = [
    "Maharashtra",
    "Delhi",
    "Karnataka",
    "Tamil Nadu",
    "Gujarat",
    "West Bengal",
    "Rajasthan",
    "Uttar Pradesh",
];

static CITIES: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    let mut cities: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
    cities.insert("Maharashtra", &["Mumbai", "Pune", "Nagpur"]);
    cities.insert("Delhi", &["New Delhi", "Dwarka", "Rohini"]);
    cities.insert("Karnataka", &["Bangalore", "Mysore", "Mangalore"]);
    cities.insert("Tamil Nadu", &["Chennai", "Coimbatore", "Madurai"]);
    cities
});

/// 선택 가능한 국가 목록
pub fn countries() -> &'static [&'static str] {
    &COUNTRIES
}

/// 국가에서 선택 가능한 주 목록. 알 수 없는 국가는 빈 목록입니다.
pub fn states_for(country: &str) -> &'static [&'static str] {
    if is_known_country(country) { &STATES[..] } else { &[] }
}

/// 주에서 선택 가능한 도시 목록. 도시가 정의되지 않은 주는 빈 목록입니다.
pub fn cities_for(state: &str) -> &'static [&'static str] {
    CITIES.get(state).copied().unwrap_or(&[])
}

pub fn is_known_country(country: &str) -> bool {
    COUNTRIES.contains(&country)
}
