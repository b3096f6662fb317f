use apartment::prelude::*;

/// Environment variable naming an optional JSON `FurnishConfig` override.
const CONFIG_ENV: &str = "HELLO_APARTMENT_CONFIG";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    println!("Hello World");

    // -----------------------------------------------------------------------
    // One room, owner assigned after the fact
    // -----------------------------------------------------------------------

    let mut room = Room::default();
    println!("Owner is currently: {}", owner_text(&room));
    room.set_owner(Some(OwnerHandle::new(Owner::default())));
    println!("Owner is currently: {}", owner_text(&room));

    if let Some(owner) = room.owner() {
        let mut owner = owner.borrow_mut();
        owner.set_name("John Doe");
        owner.set_phone("2125551234")?;
    }
    println!("Owner is currently: {}", owner_text(&room));
    drop(room);

    // -----------------------------------------------------------------------
    // A furnished apartment
    // -----------------------------------------------------------------------

    let config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => FurnishConfig::load(path)?,
        None => FurnishConfig::default(),
    };
    tracing::info!(rooms = config.room_count, seed = ?config.seed, "furnishing apartment");

    let apartment = furnish_from_config(&config)?;
    for room in &apartment {
        println!("Room : {room}");
    }
    // Management rooms all print the same Owner: they share one handle.
    println!(
        "Total Square Footage for Apartment: {}",
        apartment.total_square_feet()
    );
    Ok(())
}

fn owner_text(room: &Room) -> String {
    match room.owner() {
        Some(owner) => owner.to_string(),
        None => "null".to_string(),
    }
}
