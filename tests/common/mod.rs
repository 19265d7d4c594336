//! Shared utilities for integration tests.

use std::io::Write;
use std::net::SocketAddr;
use std::sync::Arc;

use tempfile::NamedTempFile;
use tokio::net::TcpListener;

use pokedex_server::data::Pokedex;
use pokedex_server::lifecycle::Shutdown;
use pokedex_server::{HttpServer, ServerConfig};

/// Small but realistic data document.
pub const FIXTURE: &str = r#"{
    "types": [
        {"name": "Grass", "effectiveAgainst": ["Ground", "Rock", "Water"], "weakAgainst": ["Bug", "Fire", "Flying"]},
        {"name": "Fire", "effectiveAgainst": ["Bug", "Grass", "Ice", "Steel"], "weakAgainst": ["Dragon", "Rock", "Water"]},
        {"name": "Water", "effectiveAgainst": ["Fire", "Ground", "Rock"], "weakAgainst": ["Dragon", "Grass"]}
    ],
    "pokemons": [
        {
            "Number": "001", "Name": "Bulbasaur", "Classification": "Seed Pokèmon",
            "Type I": ["Grass"], "Type II": ["Poison"], "Weaknesses": ["Fire", "Ice", "Flying", "Psychic"],
            "Fast Attack(s)": ["Tackle", "Vine Whip"], "Weight": "6.9 kg", "Height": "0.71 m",
            "Candy": {"Name": "Bulbasaur Candy", "FamilyID": 1},
            "Next Evolution Requirements": {"Amount": 25, "Family": 1, "Name": "Bulbasaur candies"},
            "Next evolution(s)": [{"Number": "002", "Name": "Ivysaur"}],
            "Special Attack(s)": ["Power Whip", "Seed Bomb", "Sludge Bomb"],
            "BaseAttack": 118, "BaseDefense": 118, "BaseStamina": 90,
            "CaptureRate": 0.16, "FleeRate": 0.1, "BuddyDistanceNeeded": 3
        },
        {
            "Number": "004", "Name": "Charmander", "Classification": "Lizard Pokèmon",
            "Type I": ["Fire"], "Weaknesses": ["Water", "Ground", "Rock"],
            "Fast Attack(s)": ["Ember", "Scratch"], "Weight": "8.5 kg", "Height": "0.61 m",
            "Candy": {"Name": "Charmander Candy", "FamilyID": 4},
            "Next evolution(s)": [{"Number": "005", "Name": "Charmeleon"}],
            "Special Attack(s)": ["Flame Burst", "Flame Charge", "Flamethrower"],
            "BaseAttack": 116, "BaseDefense": 96, "BaseStamina": 78,
            "CaptureRate": 0.16, "FleeRate": 0.1, "BuddyDistanceNeeded": 3
        },
        {
            "Number": "006", "Name": "Charizard", "Classification": "Flame Pokèmon",
            "Type I": ["Fire"], "Type II": ["Flying"], "Weaknesses": ["Water", "Electric", "Rock"],
            "Fast Attack(s)": ["Ember", "Wing Attack"], "Weight": "90.5 kg", "Height": "1.70 m",
            "Candy": {"Name": "Charmander Candy", "FamilyID": 4},
            "Previous evolution(s)": [{"Number": "004", "Name": "Charmander"}, {"Number": "005", "Name": "Charmeleon"}],
            "Special Attack(s)": ["Dragon Claw", "Fire Blast", "Flamethrower"],
            "BaseAttack": 212, "BaseDefense": 182, "BaseStamina": 156,
            "CaptureRate": 0.04, "FleeRate": 0.05, "BuddyDistanceNeeded": 3
        },
        {
            "Number": "007", "Name": "Squirtle", "Classification": "Tiny Turtle Pokèmon",
            "Type I": ["Water"], "Weaknesses": ["Electric", "Grass"],
            "Fast Attack(s)": ["Bubble", "Tackle"], "Weight": "9.0 kg", "Height": "0.51 m",
            "Candy": {"Name": "Squirtle Candy", "FamilyID": 7},
            "Special Attack(s)": ["Aqua Jet", "Aqua Tail", "Water Pulse"],
            "BaseAttack": 94, "BaseDefense": 122, "BaseStamina": 88,
            "CaptureRate": 0.16, "FleeRate": 0.1, "BuddyDistanceNeeded": 3
        },
        {
            "Number": "037", "Name": "Vulpix", "Classification": "Fox Pokèmon",
            "Type I": ["Fire"], "Weaknesses": ["Water", "Ground", "Rock"],
            "Fast Attack(s)": ["Ember", "Quick Attack"], "Weight": "9.9 kg", "Height": "0.61 m",
            "Candy": {"Name": "Vulpix Candy", "FamilyID": 37},
            "BaseAttack": 106, "BaseDefense": 118, "BaseStamina": 76,
            "CaptureRate": 0.24, "FleeRate": 0.1, "BuddyDistanceNeeded": 5
        }
    ],
    "moves": [
        {"id": 13, "name": "Wrap", "type": "Normal", "damage": 25, "energy": 20, "dps": 6.94, "duration": 3600},
        {"id": 24, "name": "Flamethrower", "type": "Fire", "damage": 55, "energy": 50, "dps": 18.97, "duration": 2900},
        {"id": 209, "name": "Ember", "type": "Fire", "damage": 10, "energy": 10, "dps": 9.52, "duration": 1050}
    ]
}"#;

/// Write `contents` to a temporary file that lives as long as the handle.
pub fn write_data_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// A server running on an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: tokio::task::JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start a server for `pokedex` on 127.0.0.1 with an OS-assigned port.
pub async fn start_server(pokedex: Arc<Pokedex>) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mut config = ServerConfig::default();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, pokedex);
    let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));

    TestServer { addr, shutdown, handle }
}

/// Fetch a body over a connection that is not pooled.
pub async fn fetch(url: &str) -> (u16, String) {
    let client = reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap();
    let res = client.get(url).send().await.expect("Server unreachable");
    let status = res.status().as_u16();
    (status, res.text().await.unwrap())
}
