//! Golden hash tests for blend mode regressions.
//!
//! Each entry is the SHA256 of the 8-bit output of one mode at full
//! opacity. The tables pin current behavior: a change to any formula,
//! branch order or rounding shows up as a hash mismatch. Update an entry
//! only together with an intended numeric change. Two input pairs are
//! covered:
//!
//! - the default 12-color rainbow stripe pair (horizontal over vertical)
//! - a 16x16 pair of smooth ramps that hits every formula branch
//!
//! # Running
//!
//! ```bash
//! cargo test --package bmc-tests golden
//! ```

use bmc_core::PixelGrid;
use bmc_ops::pattern::{striped_images, StripeConfig};
use bmc_ops::{blend_images, BlendMode, OpsResult};
use sha2::{Digest, Sha256};

// ---------------------------------------------------------------------------
// Inputs (must match the generator exactly)
// ---------------------------------------------------------------------------

/// Default rainbow stripe pair, `(horizontal, vertical)`.
pub fn stripe_pair() -> OpsResult<(PixelGrid, PixelGrid)> {
    striped_images(StripeConfig::default())
}

/// Two 16x16 ramps with unrelated directions.
pub fn ramp_pair() -> (PixelGrid, PixelGrid) {
    let a = PixelGrid::from_fn(16, 16, |x, y| {
        [x as f64 / 15.0, y as f64 / 15.0, (x + y) as f64 / 30.0]
    });
    let b = PixelGrid::from_fn(16, 16, |x, y| {
        [
            (15 - y) as f64 / 15.0,
            ((x * 7 + y * 3) % 16) as f64 / 15.0,
            0.25 + x as f64 / 60.0,
        ]
    });
    (a, b)
}

// ---------------------------------------------------------------------------
// Hash utilities
// ---------------------------------------------------------------------------

/// Lowercase hex SHA256 of the grid quantized to 8 bits.
pub fn hash_u8(grid: &PixelGrid) -> String {
    let digest = Sha256::digest(grid.to_u8());
    format!("{digest:x}")
}

/// Blends at full opacity and hashes the result.
pub fn render_hash(base: &PixelGrid, overlay: &PixelGrid, mode: BlendMode) -> OpsResult<String> {
    Ok(hash_u8(&blend_images(base, overlay, 1.0, mode)?))
}

// ---------------------------------------------------------------------------
// Golden data
// ---------------------------------------------------------------------------

/// Hashes for [`stripe_pair`].
pub const STRIPES: [(&str, &str); 26] = [
    ("normal", "ad05656221dfa38bcaa21e623aeb8385c5e0cfa651dcb670f667a2d23b76b8e5"),
    ("multiply", "07ab39dcf1daeeb8f5292b3402a270b96128ab4b601a3b246dd7606332a6f120"),
    ("screen", "204f8537754d1d07cb314dfd34c3cff61ff198cbe1c5d3c974735cccbd9594af"),
    ("overlay", "17de60de08c35b050d95e127111fefe688966d7a51fe7346b4de5cc6d8029b69"),
    ("darken", "d3b5ff4b7decb23e39c924caaf535c726c59171df1fe9b696f479f21adfdf124"),
    ("lighten", "755ba7bf79135913b2fd33ad4834849094317c8b91b441bb03553549237decc3"),
    ("color burn", "f81310d602f2b69fe2ff3043a3ccf98ad5527af343794d783d671792ecdb39ab"),
    ("linear burn", "83a08760baeb5a726ea68c2eebb37f6f375a3635ee7d222a855055fddad992a0"),
    ("darker color", "b3b82d74fba3dbe36061a69661144534192f4f57de8e57b7365fef84b7c91dfa"),
    ("lighter color", "ce41482bcec6bada786a9d0de86181cd10fcb6185839051e10a0a2be17aee976"),
    ("color dodge", "5971d39748821bc2183b2efec9770fb0ce74f4498b756ed527294e8b79aab7c6"),
    ("linear dodge", "1ffb71be31fa830885862b32b84cce1805f9e2c3b9c9cf14a2fc1adc2cacc1a7"),
    ("soft light", "fa2275ae794e72c93a1afb154ea85a8b3dc085df3748bea699ed534e02e2c931"),
    ("hard light", "4cece916af1bb63c0d071fc304bb8b54d32a1fd91e39ad12a91d7645d8612789"),
    ("vivid light", "0bdb49049229eab4d675b970e5963d1c0f6eb402500a14e2cd7dea2a6329ef88"),
    ("linear light", "e43523b2d906aa8d2230841be0c4fd28ec37e524fca17a04a73c8c310138efc3"),
    ("pin light", "55161a55737c8338793ec312834aca788871386bf7373bf5006a62d4441b0b8c"),
    ("hard mix", "e138ddc94dc10ba886ffdaa5e561e07811a7b6147626093fef7447ea093da1a4"),
    ("difference", "0c4a194ed807fca064b04c0b48ee26b92c9fba07a120b307e375a6500acd007d"),
    ("exclusion", "73f352777d1d991e2136230afd77a89b087ab1664a87006dccf39472edf1a8cc"),
    ("subtract", "ff555665ca35a5407119a19eae0c205b36c0c3285d4fceed3bfc716d565fdcdf"),
    ("divide", "75259172f46b49121e9c143ed1321795f51822cbb282ed3b6ff3216a6114b56f"),
    ("hue", "e913cc39d0e4cb3c6a3b38715132b595733fde4d16e6a8a9b1b02b11dcb566fe"),
    ("saturation", "688a98ebc40fe61b7100d2fcd31dff945c584b64964dd829cd605c0ac937c5ac"),
    ("color", "e913cc39d0e4cb3c6a3b38715132b595733fde4d16e6a8a9b1b02b11dcb566fe"),
    ("luminosity", "aaeb301a47ec2205518daf5f2580751ac42d29554d48a11ea162880039abcdf6"),
];

/// Hashes for [`ramp_pair`].
pub const RAMPS: [(&str, &str); 26] = [
    ("normal", "4313902229186531fed53754d5b52990467784487730736fe333dc0026a29c56"),
    ("multiply", "1f86234a728fb6d9fb65e36897c5e5d2d4117af2d3c86f276270bd36421082ed"),
    ("screen", "fcbf9214e3387d0f3c0296b47cdc1d84b84483d9ad900fed77d905dc81aab0bc"),
    ("overlay", "861820d431c28e61e278df8ed8c8ecb57d6911e4290f3335483e051d2a0fc35d"),
    ("darken", "98a222f7a63c3e9cc295fdc5d2c940e1a59ed0c6e5cf824204345e5c2ec3eb7f"),
    ("lighten", "c5106d9ec5cca6a8a67692fbbf907c0c3eb441abc28b15e0184376059d1a6472"),
    ("color burn", "dda47bd098cea040ec517a916ec81c9b72e4b78e3401bf1ad427f2eb406af431"),
    ("linear burn", "71a25525b321374eb496b8c8d7a0543be0ce686f9edd8c006fddb4d34a1ce6c9"),
    ("darker color", "ab7346fbb0c0651623c1df871a01e1d4c77b1a3caa45e9d18fde465e4d9d38bf"),
    ("lighter color", "754be3b63155db6bcb89fd2cf5f2faa7b466d8fef4101b8b718d93760f6fd953"),
    ("color dodge", "b9f0364be05a009d98617c7f44f58acd5d9918e6d93e2d19920acbe0a360f0f1"),
    ("linear dodge", "7e66a175151a16e0a56897bf390a9f8ec0e7874a0ab4cc4b15f62ebcfbeb9dc2"),
    ("soft light", "89e91e946d44deca07d023df903b35949986ad6362d6620597db7f7fb58fece1"),
    ("hard light", "6d72b843761c6d89c9eff4878b5e2c732750587016e5b9bbbf46309b099c35cf"),
    ("vivid light", "79df8dcf567bdac2c5c74d6f84d9e81c174f9fe689d3a73e2da752a73941d8a9"),
    ("linear light", "9e4315a560d4dafb8d02b175b0440758dae67087a65c5c171b3bb965a075ae8d"),
    ("pin light", "7a371146a13053041bf05a31465d04df22c4eb0ab63c5b095825ca0bc79c1eb0"),
    ("hard mix", "390fccd41202b6657cee5e6b96c0b14f6c8b263ddcba3c7922b0a22ed9fab52d"),
    ("difference", "82cfe764de25b9694303bde1526cf1c9f8232d0615d621d3db5706b69c5dab7b"),
    ("exclusion", "09ce2ab39a553765a213962625aa925d2e36041946ca12257cc7398f6ba8e5ca"),
    ("subtract", "3b844a14d102ca90f395ece3a16451ff9c79441bbec63d8c7c92a11875c63de4"),
    ("divide", "72c63dae0a4b32b3844914d776be3b9612e5e590220843b0899dd4a41cc250c0"),
    ("hue", "ab7d13bb07cbe0ada037cc9b68ea2fb01fc481c09625078dfea7a0d0f276412e"),
    ("saturation", "9c14d6c7bd72b140d445dde3898386ecef0bc4069b2901c8253138efeec01f33"),
    ("color", "855ff352375b02bc07af16bac1ece69f350c2a98b1230a6c55f575b7c1471985"),
    ("luminosity", "ad55f423d8e78d460f168ffc3ecb612509fd25a05d6d62aefbd97da89fc369fb"),
];
