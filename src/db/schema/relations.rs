//! All database relation definitions.
//!
//! Five entity relations, two junction relations, and the key sequence.
//! Storage columns are snake_case; the serialized shapes in `crate::models`
//! rename them back to the API spelling.

use super::definition::{DataType, ForeignKey, SchemaField, SchemaRelation, SchemaRelationship};

const fn required(name: &'static str, data_type: DataType) -> SchemaField {
    SchemaField {
        name,
        data_type,
        nullable: false,
        default: None,
    }
}

const fn optional(
    name: &'static str,
    data_type: DataType,
    default: &'static str,
) -> SchemaField {
    SchemaField {
        name,
        data_type,
        nullable: true,
        default: Some(default),
    }
}

const ID_KEY: &[SchemaField] = &[required("id", DataType::Int)];

/// `MSite.magnets`, through `magnet_msite_link`
pub const MSITE_MAGNETS: SchemaRelationship = SchemaRelationship {
    name: "magnets",
    target: "magnet",
    link: "magnet_msite_link",
    source_column: "msite_id",
    target_column: "magnet_id",
};

/// `Magnet.msites`, through `magnet_msite_link`
pub const MAGNET_MSITES: SchemaRelationship = SchemaRelationship {
    name: "msites",
    target: "msite",
    link: "magnet_msite_link",
    source_column: "magnet_id",
    target_column: "msite_id",
};

/// `Magnet.mparts`, through `mpart_magnet_link`
pub const MAGNET_MPARTS: SchemaRelationship = SchemaRelationship {
    name: "mparts",
    target: "mpart",
    link: "mpart_magnet_link",
    source_column: "magnet_id",
    target_column: "mpart_id",
};

/// `MPart.magnets`, through `mpart_magnet_link`
pub const MPART_MAGNETS: SchemaRelationship = SchemaRelationship {
    name: "magnets",
    target: "magnet",
    link: "mpart_magnet_link",
    source_column: "mpart_id",
    target_column: "magnet_id",
};

/// Material relation: physical properties in SI for an isotropic material
///
/// Key fields: id
/// Value fields: name, tref, volumic_mass, specific_heat, alpha,
/// electrical_conductivity, thermal_conductivity, magnet_permeability, young,
/// poisson, coef_dilatation, reference
pub const MATERIAL: SchemaRelation = SchemaRelation {
    name: "material",
    key_fields: ID_KEY,
    value_fields: &[
        required("name", DataType::String),
        required("tref", DataType::Float),
        required("volumic_mass", DataType::Float),
        required("specific_heat", DataType::Float),
        optional("alpha", DataType::Float, "0.0"),
        optional("electrical_conductivity", DataType::Float, "0.0"),
        required("thermal_conductivity", DataType::Float),
        required("magnet_permeability", DataType::Float),
        required("young", DataType::Float),
        required("poisson", DataType::Float),
        required("coef_dilatation", DataType::Float),
        optional("reference", DataType::String, "null"),
    ],
    foreign_keys: &[],
    relationships: &[],
};

/// Magnet site relation
///
/// Key fields: id
/// Value fields: name, conffile, status
pub const MSITE: SchemaRelation = SchemaRelation {
    name: "msite",
    key_fields: ID_KEY,
    value_fields: &[
        required("name", DataType::String),
        required("conffile", DataType::String),
        required("status", DataType::String),
    ],
    foreign_keys: &[],
    relationships: &[MSITE_MAGNETS],
};

/// Magnet relation
///
/// Key fields: id
/// Value fields: name, be, geom, status
pub const MAGNET: SchemaRelation = SchemaRelation {
    name: "magnet",
    key_fields: ID_KEY,
    value_fields: &[
        required("name", DataType::String),
        required("be", DataType::String),
        required("geom", DataType::String),
        required("status", DataType::String),
    ],
    foreign_keys: &[],
    relationships: &[MAGNET_MSITES, MAGNET_MPARTS],
};

/// Magnet part relation
///
/// Key fields: id
/// Value fields: name, part_type, be, geom, status, material_id
pub const MPART: SchemaRelation = SchemaRelation {
    name: "mpart",
    key_fields: ID_KEY,
    value_fields: &[
        required("name", DataType::String),
        required("part_type", DataType::String),
        required("be", DataType::String),
        required("geom", DataType::String),
        required("status", DataType::String),
        optional("material_id", DataType::Int, "null"),
    ],
    foreign_keys: &[ForeignKey {
        column: "material_id",
        target: "material",
        target_column: "id",
    }],
    relationships: &[MPART_MAGNETS],
};

/// Magnet record relation: timestamped entries attached to a site
///
/// Key fields: id
/// Value fields: timestamp, name, msite_id
pub const MRECORD: SchemaRelation = SchemaRelation {
    name: "mrecord",
    key_fields: ID_KEY,
    value_fields: &[
        required("timestamp", DataType::String),
        required("name", DataType::String),
        optional("msite_id", DataType::Int, "null"),
    ],
    foreign_keys: &[ForeignKey {
        column: "msite_id",
        target: "msite",
        target_column: "id",
    }],
    relationships: &[],
};

/// MPart/Magnet junction
///
/// Key fields: magnet_id, mpart_id
pub const MPART_MAGNET_LINK: SchemaRelation = SchemaRelation {
    name: "mpart_magnet_link",
    key_fields: &[
        required("magnet_id", DataType::Int),
        required("mpart_id", DataType::Int),
    ],
    value_fields: &[],
    foreign_keys: &[
        ForeignKey {
            column: "magnet_id",
            target: "magnet",
            target_column: "id",
        },
        ForeignKey {
            column: "mpart_id",
            target: "mpart",
            target_column: "id",
        },
    ],
    relationships: &[],
};

/// Magnet/MSite junction
///
/// Key fields: magnet_id, msite_id
pub const MAGNET_MSITE_LINK: SchemaRelation = SchemaRelation {
    name: "magnet_msite_link",
    key_fields: &[
        required("magnet_id", DataType::Int),
        required("msite_id", DataType::Int),
    ],
    value_fields: &[],
    foreign_keys: &[
        ForeignKey {
            column: "magnet_id",
            target: "magnet",
            target_column: "id",
        },
        ForeignKey {
            column: "msite_id",
            target: "msite",
            target_column: "id",
        },
    ],
    relationships: &[],
};

/// Last key handed out per entity relation. Keys are never reused.
///
/// Key fields: relation_name
/// Value fields: last_id
pub const ID_SEQUENCE: SchemaRelation = SchemaRelation {
    name: "id_sequence",
    key_fields: &[required("relation_name", DataType::String)],
    value_fields: &[required("last_id", DataType::Int)],
    foreign_keys: &[],
    relationships: &[],
};

/// All relations, referenced tables before the tables that reference them.
pub const ALL_RELATIONS: &[&SchemaRelation] = &[
    &ID_SEQUENCE,
    &MATERIAL,
    &MSITE,
    &MAGNET,
    &MPART,
    &MRECORD,
    &MPART_MAGNET_LINK,
    &MAGNET_MSITE_LINK,
];

/// Find a relation definition by name.
pub fn find_relation(name: &str) -> Option<&'static SchemaRelation> {
    ALL_RELATIONS.iter().copied().find(|r| r.name == name)
}
