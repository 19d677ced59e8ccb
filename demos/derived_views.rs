//! Derived views over an in-memory store; no backend needed.

use travelog::prelude::*;

fn main() {
    let mut state = CitiesState::default();
    println!("{:?}", country_list(&state.cities, state.is_loading));

    state = reducer(&state, Action::Loading);
    println!("{:?}", country_list(&state.cities, state.is_loading));

    let visits = [
        ("1", "Lisbon", "Portugal", "PT"),
        ("2", "Porto", "Portugal", "PT"),
        ("3", "Berlin", "Germany", "DE"),
    ];
    let cities = visits
        .iter()
        .map(|(id, name, country, code)| City {
            id: CityId::new(*id),
            city_name: name.to_string(),
            country: country.to_string(),
            emoji: flag_emoji(code).unwrap_or_default(),
            date: "2027-10-31T15:59:59.138Z".to_string(),
            notes: String::new(),
            position: Position { lat: 0.0, lng: 0.0 },
        })
        .collect();
    state = reducer(&state, Action::CitiesLoaded(cities));

    for country in country_list(&state.cities, state.is_loading).items() {
        println!("{} {}", country.emoji, country.country);
    }
    for city in city_list(&state.cities, state.is_loading, state.current_id()).items() {
        println!("{} {} ({})", city.emoji, city.city_name, city.date_label);
    }
}
