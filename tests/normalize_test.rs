use sokcho::infrastructure::juso::{
    build_road_address_and_zip, normalize_detail, normalize_region_prefix, prepare_api_keyword,
    sanitize_keyword, split_base_detail, strip_parentheses, JusoAddress,
};

fn address(road_addr: &str, part1: &str, part2: &str, zip: &str) -> JusoAddress {
    let json = serde_json::json!({
        "roadAddr": road_addr,
        "roadAddrPart1": part1,
        "roadAddrPart2": part2,
        "zipNo": zip,
    });
    serde_json::from_value(json).unwrap()
}

#[test]
fn given_long_region_prefix_when_normalized_then_shortened() {
    assert_eq!(
        normalize_region_prefix("서울특별시 강남구 테헤란로 123"),
        "서울 강남구 테헤란로 123"
    );
    assert_eq!(
        normalize_region_prefix("경기도 성남시 분당구"),
        "경기 성남시 분당구"
    );
    assert_eq!(
        normalize_region_prefix("세종특별자치시 한누리대로 2130"),
        "세종 한누리대로 2130"
    );
}

#[test]
fn given_already_short_prefix_when_normalized_then_unchanged() {
    assert_eq!(normalize_region_prefix("서울 강남구"), "서울 강남구");
    assert_eq!(normalize_region_prefix("강원도 춘천시"), "강원도 춘천시");
}

#[test]
fn given_comma_when_split_then_base_and_detail() {
    let (base, detail) = split_base_detail("서울시 강남구 테헤란로 123, 101동 202호");
    assert_eq!(base, "서울시 강남구 테헤란로 123");
    assert_eq!(detail, "101동 202호");
}

#[test]
fn given_no_comma_when_split_then_detail_empty() {
    let (base, detail) = split_base_detail("  부산시 해운대구 우동  ");
    assert_eq!(base, "부산시 해운대구 우동");
    assert_eq!(detail, "");
}

#[test]
fn given_parentheticals_when_stripped_then_removed() {
    assert_eq!(
        strip_parentheses("테헤란로 123 (역삼동, 타워) 5층"),
        "테헤란로 123  5층"
    );
}

#[test]
fn given_trailing_unit_when_keyword_prepared_then_dropped() {
    assert_eq!(
        prepare_api_keyword("서울시 강남구 테헤란로 123 101동 202호"),
        "서울시 강남구 테헤란로 123"
    );
    assert_eq!(
        prepare_api_keyword("테헤란로 123 (역삼동) 5층"),
        "테헤란로 123"
    );
}

#[test]
fn given_sql_fragments_when_sanitized_then_scrubbed() {
    assert_eq!(
        sanitize_keyword("테헤란로 SELECT 123 > OR"),
        "테헤란로 123"
    );
    assert_eq!(sanitize_keyword("  도로명   주소  "), "도로명 주소");
}

#[test]
fn given_dong_ho_run_together_when_detail_normalized_then_spaced() {
    assert_eq!(normalize_detail("101동202호", ""), "101동 202호");
}

#[test]
fn given_building_name_in_detail_when_normalized_then_removed() {
    assert_eq!(
        normalize_detail("한국타워 101동 202호", "한국타워"),
        "101동 202호"
    );
}

#[test]
fn given_no_detail_when_rebuilt_then_full_road_address() {
    let item = address(
        "서울특별시 강남구 테헤란로 123 (역삼동)",
        "서울특별시 강남구 테헤란로 123",
        " (역삼동)",
        "06234",
    );

    let (addr, zip) = build_road_address_and_zip(&item, "");

    assert_eq!(addr, "서울특별시 강남구 테헤란로 123 (역삼동)");
    assert_eq!(zip, "06234");
}

#[test]
fn given_caller_detail_when_rebuilt_then_detail_reattached() {
    let item = address(
        "서울특별시 강남구 테헤란로 123 (역삼동, 한국타워)",
        "서울특별시 강남구 테헤란로 123",
        " (역삼동, 한국타워)",
        "06234",
    );

    let (addr, zip) = build_road_address_and_zip(&item, "한국타워 101동202호");

    assert_eq!(
        addr,
        "서울특별시 강남구 테헤란로 123, 101동 202호 (역삼동, 한국타워)"
    );
    assert_eq!(zip, "06234");
}

#[test]
fn given_empty_part1_when_rebuilt_then_falls_back_to_full() {
    let item = address("세종특별자치시 한누리대로 2130", "", "", "30151");

    let (addr, zip) = build_road_address_and_zip(&item, "");

    assert_eq!(addr, "세종특별자치시 한누리대로 2130");
    assert_eq!(zip, "30151");
}
