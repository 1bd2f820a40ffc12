//! Mapping between stored rows and entity shapes.
//!
//! Every entity relation has a single key column `id`. Rows are laid out in
//! `relation.all_fields()` order, which is also the order `CozoCompiler`
//! emits in `:put` and select heads.

use cozo::DataValue;

use crate::db::schema::{
    SchemaRelation, SchemaRelationship, MAGNET, MAGNET_MPARTS, MAGNET_MSITES, MATERIAL, MPART,
    MPART_MAGNETS, MRECORD, MSITE, MSITE_MAGNETS,
};
use crate::db::{
    float_value, int_value, opt_float_value, opt_int_value, opt_string_value, string_value,
    DbError, RowReader,
};
use crate::models::{
    MPart, MPartBase, MPartUpdate, MRecord, MRecordBase, MSite, MSiteBase, MSiteUpdate, Magnet,
    MagnetBase, MagnetUpdate, Material, MaterialBase,
};

/// Replacement set of linked ids for one many-to-many relationship.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkSet {
    pub relationship: &'static SchemaRelationship,
    pub ids: Vec<i64>,
}

impl LinkSet {
    fn new(relationship: &'static SchemaRelationship, ids: impl IntoIterator<Item = i64>) -> Self {
        let mut ids: Vec<i64> = ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        Self { relationship, ids }
    }
}

/// A stored entity: one row of an entity relation keyed by `id`.
pub trait Entity: Sized {
    type Create;
    type Update;

    const RELATION: &'static SchemaRelation;

    fn id(&self) -> i64;

    /// Build the stored row for a freshly allocated key.
    fn from_create(id: i64, create: Self::Create) -> Self;

    /// Split a full-replace payload into the new row and the link sets that
    /// replace the entity's current relationships.
    fn from_update(id: i64, update: Self::Update) -> (Self, Vec<LinkSet>);

    fn to_row(&self) -> Vec<DataValue>;

    fn from_row(row: &[DataValue]) -> Result<Self, DbError>;
}

impl Entity for Material {
    type Create = MaterialBase;
    type Update = MaterialBase;

    const RELATION: &'static SchemaRelation = &MATERIAL;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_create(id: i64, base: MaterialBase) -> Self {
        Material { id, base }
    }

    fn from_update(id: i64, base: MaterialBase) -> (Self, Vec<LinkSet>) {
        (Material { id, base }, Vec::new())
    }

    fn to_row(&self) -> Vec<DataValue> {
        let b = &self.base;
        vec![
            int_value(self.id),
            string_value(&b.name),
            float_value(b.tref),
            float_value(b.volumic_mass),
            float_value(b.specific_heat),
            opt_float_value(b.alpha),
            opt_float_value(b.electrical_conductivity),
            float_value(b.thermal_conductivity),
            float_value(b.magnet_permeability),
            float_value(b.young),
            float_value(b.poisson),
            float_value(b.coef_dilatation),
            opt_string_value(b.reference.as_deref()),
        ]
    }

    fn from_row(row: &[DataValue]) -> Result<Self, DbError> {
        let r = RowReader::new(Self::RELATION, row);
        Ok(Material {
            id: r.int("id")?,
            base: MaterialBase {
                name: r.string("name")?,
                tref: r.float("tref")?,
                volumic_mass: r.float("volumic_mass")?,
                specific_heat: r.float("specific_heat")?,
                alpha: r.opt_float("alpha")?,
                electrical_conductivity: r.opt_float("electrical_conductivity")?,
                thermal_conductivity: r.float("thermal_conductivity")?,
                magnet_permeability: r.float("magnet_permeability")?,
                young: r.float("young")?,
                poisson: r.float("poisson")?,
                coef_dilatation: r.float("coef_dilatation")?,
                reference: r.opt_string("reference")?,
            },
        })
    }
}

impl Entity for MSite {
    type Create = MSiteBase;
    type Update = MSiteUpdate;

    const RELATION: &'static SchemaRelation = &MSITE;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_create(id: i64, base: MSiteBase) -> Self {
        MSite { id, base }
    }

    fn from_update(id: i64, update: MSiteUpdate) -> (Self, Vec<LinkSet>) {
        let magnets = LinkSet::new(&MSITE_MAGNETS, update.magnets.iter().map(|m| m.id));
        (MSite { id, base: update.base }, vec![magnets])
    }

    fn to_row(&self) -> Vec<DataValue> {
        vec![
            int_value(self.id),
            string_value(&self.base.name),
            string_value(&self.base.conffile),
            string_value(&self.base.status),
        ]
    }

    fn from_row(row: &[DataValue]) -> Result<Self, DbError> {
        let r = RowReader::new(Self::RELATION, row);
        Ok(MSite {
            id: r.int("id")?,
            base: MSiteBase {
                name: r.string("name")?,
                conffile: r.string("conffile")?,
                status: r.string("status")?,
            },
        })
    }
}

impl Entity for Magnet {
    type Create = MagnetBase;
    type Update = MagnetUpdate;

    const RELATION: &'static SchemaRelation = &MAGNET;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_create(id: i64, base: MagnetBase) -> Self {
        Magnet { id, base }
    }

    fn from_update(id: i64, update: MagnetUpdate) -> (Self, Vec<LinkSet>) {
        let links = vec![
            LinkSet::new(&MAGNET_MSITES, update.msites.iter().map(|s| s.id)),
            LinkSet::new(&MAGNET_MPARTS, update.mparts.iter().map(|p| p.id)),
        ];
        (Magnet { id, base: update.base }, links)
    }

    fn to_row(&self) -> Vec<DataValue> {
        vec![
            int_value(self.id),
            string_value(&self.base.name),
            string_value(&self.base.be),
            string_value(&self.base.geom),
            string_value(&self.base.status),
        ]
    }

    fn from_row(row: &[DataValue]) -> Result<Self, DbError> {
        let r = RowReader::new(Self::RELATION, row);
        Ok(Magnet {
            id: r.int("id")?,
            base: MagnetBase {
                name: r.string("name")?,
                be: r.string("be")?,
                geom: r.string("geom")?,
                status: r.string("status")?,
            },
        })
    }
}

impl Entity for MPart {
    type Create = MPartBase;
    type Update = MPartUpdate;

    const RELATION: &'static SchemaRelation = &MPART;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_create(id: i64, base: MPartBase) -> Self {
        MPart { id, base }
    }

    fn from_update(id: i64, update: MPartUpdate) -> (Self, Vec<LinkSet>) {
        let magnets = LinkSet::new(&MPART_MAGNETS, update.magnets.iter().map(|m| m.id));
        (MPart { id, base: update.base }, vec![magnets])
    }

    fn to_row(&self) -> Vec<DataValue> {
        let b = &self.base;
        vec![
            int_value(self.id),
            string_value(&b.name),
            string_value(&b.part_type),
            string_value(&b.be),
            string_value(&b.geom),
            string_value(&b.status),
            opt_int_value(b.material_id),
        ]
    }

    fn from_row(row: &[DataValue]) -> Result<Self, DbError> {
        let r = RowReader::new(Self::RELATION, row);
        Ok(MPart {
            id: r.int("id")?,
            base: MPartBase {
                name: r.string("name")?,
                part_type: r.string("part_type")?,
                be: r.string("be")?,
                geom: r.string("geom")?,
                status: r.string("status")?,
                material_id: r.opt_int("material_id")?,
            },
        })
    }
}

impl Entity for MRecord {
    type Create = MRecordBase;
    type Update = MRecordBase;

    const RELATION: &'static SchemaRelation = &MRECORD;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_create(id: i64, base: MRecordBase) -> Self {
        MRecord { id, base }
    }

    fn from_update(id: i64, base: MRecordBase) -> (Self, Vec<LinkSet>) {
        (MRecord { id, base }, Vec::new())
    }

    fn to_row(&self) -> Vec<DataValue> {
        vec![
            int_value(self.id),
            string_value(&self.base.timestamp),
            string_value(&self.base.name),
            opt_int_value(self.base.msite_id),
        ]
    }

    fn from_row(row: &[DataValue]) -> Result<Self, DbError> {
        let r = RowReader::new(Self::RELATION, row);
        Ok(MRecord {
            id: r.int("id")?,
            base: MRecordBase {
                timestamp: r.string("timestamp")?,
                name: r.string("name")?,
                msite_id: r.opt_int("msite_id")?,
            },
        })
    }
}
