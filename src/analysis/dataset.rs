//! Canonical OTB sequence collections.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use strum::Display;

const TB50: [&str; 50] = [
    "Basketball",
    "Biker",
    "Bird1",
    "BlurBody",
    "BlurCar2",
    "BlurFace",
    "BlurOwl",
    "Bolt",
    "Box",
    "Car1",
    "Car4",
    "CarDark",
    "CarScale",
    "ClifBar",
    "Couple",
    "Crowds",
    "David",
    "Deer",
    "Diving",
    "DragonBaby",
    "Dudek",
    "Football",
    "Freeman4",
    "Girl",
    "Human3",
    "Human4",
    "Human6",
    "Human9",
    "Ironman",
    "Jump",
    "Jumping",
    "Liquor",
    "Matrix",
    "MotorRolling",
    "Panda",
    "RedTeam",
    "Shaking",
    "Singer2",
    "Skating1",
    "Skating2-1",
    "Skating2-2",
    "Skiing",
    "Soccer",
    "Surfer",
    "Sylvester",
    "Tiger2",
    "Trellis",
    "Walking",
    "Walking2",
    "Woman",
];

// Sequences in TB100 beyond TB50. BlurCar2 also appears in TB50.
const TB100_ADDITIONS: [&str; 50] = [
    "Bird2",
    "BlurCar1",
    "BlurCar2",
    "BlurCar4",
    "Board",
    "Bolt2",
    "Boy",
    "Car2",
    "Car24",
    "Coke",
    "Coupon",
    "Crossing",
    "Dancer",
    "Dancer2",
    "David2",
    "David3",
    "Dog",
    "Dog1",
    "Doll",
    "FaceOcc1",
    "FaceOcc2",
    "Fish",
    "FleetFace",
    "Football1",
    "Freeman1",
    "Freeman3",
    "Girl2",
    "Gym",
    "Human2",
    "Human5",
    "Human7",
    "Human8",
    "Jogging-1",
    "Jogging-2",
    "KiteSurf",
    "Lemming",
    "Man",
    "Mhyang",
    "MountainBike",
    "Rubik",
    "Singer1",
    "Skater",
    "Skater2",
    "Subway",
    "Suv",
    "Tiger1",
    "Toy",
    "Trans",
    "Twinnings",
    "Vase",
];

static TB50_SET: LazyLock<BTreeSet<&'static str>> = LazyLock::new(|| TB50.into_iter().collect());

static TB100_SET: LazyLock<BTreeSet<&'static str>> =
    LazyLock::new(|| TB50.into_iter().chain(TB100_ADDITIONS).collect());

/// The 50-sequence OTB collection, sorted.
pub fn tb50() -> &'static BTreeSet<&'static str> {
    &TB50_SET
}

/// The OTB-100 collection, sorted and de-duplicated.
///
/// Holds 99 names: BlurCar2 is listed in both halves and BlurCar3 is absent.
pub fn tb100() -> &'static BTreeSet<&'static str> {
    &TB100_SET
}

/// Known data set a list of sequences corresponds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum DataSetName {
    Tb50,
    Tb100,
    Unknown,
}

/// Identify the data set whose sequences are exactly `names`.
///
/// Order and repetition in `names` do not matter; a partial match is `Unknown`.
pub fn classify_dataset<'a, I>(names: I) -> DataSetName
where
    I: IntoIterator<Item = &'a str>,
{
    let names: BTreeSet<&str> = names.into_iter().collect();
    if names == *tb50() {
        DataSetName::Tb50
    } else if names == *tb100() {
        DataSetName::Tb100
    } else {
        DataSetName::Unknown
    }
}
