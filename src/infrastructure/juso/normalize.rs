//! Address string transforms applied around the Juso lookup: shorten
//! region prefixes, split the caller's detail part from the searchable
//! base, and rebuild the refined address from the API's answer.

use std::sync::LazyLock;

use regex::Regex;

use super::client::JusoAddress;
use super::sanitize::sanitize_keyword;

/// Long-form region prefixes and their common short forms. Only a
/// leading occurrence is replaced.
const REGION_PREFIXES: &[(&str, &str)] = &[
    ("서울특별시", "서울"),
    ("서울시", "서울"),
    ("경기도", "경기"),
    ("부산광역시", "부산"),
    ("부산시", "부산"),
    ("대구광역시", "대구"),
    ("대구시", "대구"),
    ("인천광역시", "인천"),
    ("인천시", "인천"),
    ("광주광역시", "광주"),
    ("광주시", "광주"),
    ("대전광역시", "대전"),
    ("대전시", "대전"),
    ("울산광역시", "울산"),
    ("울산시", "울산"),
    ("세종특별자치시", "세종"),
    ("세종시", "세종"),
    ("제주특별자치도", "제주"),
    ("제주시", "제주"),
    ("경상북도", "경북"),
    ("경상남도", "경남"),
    ("전라북도", "전북"),
    ("전라남도", "전남"),
];

static PARENTHESES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\([^)]*\)").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static WRAPPED_IN_PARENS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\((.*)\)$").unwrap());
static DONG_HO_SPACING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*동\s*(\d+)\s*호").unwrap());
static TRAILING_DONG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+\d+\s*동.*$").unwrap());
static TRAILING_FLOOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+\d+\s*층.*$").unwrap());
static TRAILING_HO: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+\d+\s*호.*$").unwrap());

pub fn normalize_region_prefix(addr: &str) -> String {
    for (long, short) in REGION_PREFIXES {
        if let Some(rest) = addr.strip_prefix(long) {
            return format!("{}{}", short, rest);
        }
    }
    addr.to_string()
}

/// Split a raw input into the searchable base and the caller's own
/// detail (unit, floor…), separated by the first comma.
pub fn split_base_detail(raw: &str) -> (String, String) {
    let raw = raw.trim();
    match raw.split_once(',') {
        Some((base, detail)) => (base.trim().to_string(), detail.trim().to_string()),
        None => (raw.to_string(), String::new()),
    }
}

pub fn strip_parentheses(text: &str) -> String {
    PARENTHESES.replace_all(text, "").trim().to_string()
}

/// `roadAddrPart2` looks like `(동/리, 건물명)` when a building name is
/// present; only then is there a name to extract.
fn extract_building_name(part2: &str) -> String {
    let Some(caps) = WRAPPED_IN_PARENS.captures(part2.trim()) else {
        return String::new();
    };
    let parts: Vec<&str> = caps[1]
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() >= 2 {
        parts[parts.len() - 1].to_string()
    } else {
        String::new()
    }
}

/// Clean the caller's detail part: drop parentheticals, drop the
/// building name the API already carries, fix `N동 M호` spacing.
pub fn normalize_detail(detail: &str, building_name: &str) -> String {
    if detail.is_empty() {
        return String::new();
    }
    let mut d = strip_parentheses(detail.trim());
    if !building_name.is_empty() {
        d = d.replace(building_name, "").trim().to_string();
    }
    d = d.replace(')', "").replace('(', "").trim().to_string();
    d = WHITESPACE.replace_all(&d, " ").trim().to_string();
    DONG_HO_SPACING.replace_all(&d, "$1동 $2호").to_string()
}

/// Reduce the base part to something the search API likes: no
/// parentheticals, no trailing unit/floor suffixes, sanitized.
pub fn prepare_api_keyword(base: &str) -> String {
    let mut s = strip_parentheses(base.trim());
    s = TRAILING_DONG.replace(&s, "").to_string();
    s = TRAILING_FLOOR.replace(&s, "").to_string();
    s = TRAILING_HO.replace(&s, "").to_string();
    s = WHITESPACE.replace_all(&s, " ").trim().to_string();
    sanitize_keyword(&s)
}

/// Rebuild the full refined address and zip code from the best match,
/// re-attaching the caller's detail when there is one.
pub fn build_road_address_and_zip(item: &JusoAddress, original_detail: &str) -> (String, String) {
    let part1 = item.road_addr_part1.trim();
    let part2 = item.road_addr_part2.trim();
    let road_full = item.road_addr.trim();
    let zip_no = item.zip_no.trim().to_string();

    let base = if !part1.is_empty() { part1 } else { road_full };
    let building_name = extract_building_name(part2);
    let detail = normalize_detail(original_detail, &building_name);

    let addr = if !detail.is_empty() {
        format!("{}, {}{}", base, detail, part2).trim().to_string()
    } else if !road_full.is_empty() {
        road_full.to_string()
    } else {
        format!("{}{}", part1, part2).trim().to_string()
    };

    (addr, zip_no)
}
