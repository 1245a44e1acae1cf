use notebook_core::Address;

#[test]
fn default_address_is_empty() {
    let address = Address::default();

    assert_eq!(address.street, "");
    assert_eq!(address.city, "");
    assert_eq!(address.country, "");
    assert_eq!(address.full_address(), ", , ");
}

#[test]
fn replace_overwrites_all_fields() {
    let mut address = Address::default();

    address.replace("Khreshchatyk St, 123", "Kyiv", "Ukraine");
    assert_eq!(address.full_address(), "Khreshchatyk St, 123, Kyiv, Ukraine");

    address.replace("Nova St, 999", "Odesa", "Ukraine");
    assert_eq!(address.full_address(), "Nova St, 999, Odesa, Ukraine");
}

#[test]
fn replace_accepts_arbitrary_text() {
    let mut address = Address::new("a", "b", "c");

    address.replace("", "  padded  ", "multi\nline");
    assert_eq!(address.full_address(), ",   padded  , multi\nline");
}

#[test]
fn display_prefixes_the_address_line() {
    let address = Address::new("Svobody Ave, 456", "Lviv", "Ukraine");
    assert_eq!(address.to_string(), "Address: Svobody Ave, 456, Lviv, Ukraine");
}

#[test]
fn address_serialization_uses_expected_wire_fields() {
    let address = Address::new("Khreshchatyk St, 123", "Kyiv", "Ukraine");

    let json = serde_json::to_value(&address).expect("address should serialize");
    assert_eq!(json["street"], "Khreshchatyk St, 123");
    assert_eq!(json["city"], "Kyiv");
    assert_eq!(json["country"], "Ukraine");

    let decoded: Address = serde_json::from_value(json).expect("address should deserialize");
    assert_eq!(decoded, address);
}
