/// Districts the service publishes deforestation data for, in selector order.
pub const KNOWN_LOCATIONS: [&str; 13] = [
    "Alipurduar",
    "Bankura",
    "Birbhum",
    "Cooch Behar",
    "Darjeeling",
    "Hooghly",
    "Jalpaiguri",
    "Murshidabad",
    "Nadia",
    "North 24 Parganas",
    "South 24 Parganas",
    "Paschim Medinipur",
    "Purulia",
];
