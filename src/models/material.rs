//! Material shapes.

use serde::{Deserialize, Serialize};

fn default_zero() -> Option<f64> {
    Some(0.0)
}

/// Material physical properties in SI for an isotropic material.
///
/// `alpha` and `ElectricalConductivity` default to 0 when omitted; an explicit
/// `null` is kept as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialBase {
    pub name: String,

    #[serde(rename = "Tref")]
    pub tref: f64,

    #[serde(rename = "VolumicMass")]
    pub volumic_mass: f64,
    #[serde(rename = "SpecificHeat")]
    pub specific_heat: f64,

    #[serde(default = "default_zero")]
    pub alpha: Option<f64>,
    #[serde(rename = "ElectricalConductivity", default = "default_zero")]
    pub electrical_conductivity: Option<f64>,
    #[serde(rename = "ThermalConductivity")]
    pub thermal_conductivity: f64,
    #[serde(rename = "MagnetPermeability")]
    pub magnet_permeability: f64,

    #[serde(rename = "Young")]
    pub young: f64,
    #[serde(rename = "Poisson")]
    pub poisson: f64,
    #[serde(rename = "CoefDilatation")]
    pub coef_dilatation: f64,

    #[serde(rename = "ref", default)]
    pub reference: Option<String>,
}

/// A stored material: the base fields plus its key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: i64,
    #[serde(flatten)]
    pub base: MaterialBase,
}

pub type MaterialCreate = MaterialBase;
pub type MaterialRead = Material;
/// Every property is resupplied on update.
pub type MaterialUpdate = MaterialBase;
