//! The fixed category set and the material-type lookup table.

/// Output bucket for a product. Every product lands in exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    NeedlesAndCartridges,
    Inks,
    Machines,
    PowerSuppliesAndCables,
    InkCaps,
    Gloves,
    BarrierMaterials,
    AftercareCreams,
    Pedals,
    Tips,
    Biosafety,
    StencilMaterials,
    BodyHygiene,
    OtherCosmetics,
    Uncategorized,
}

impl Category {
    pub const ALL: [Category; 15] = [
        Category::NeedlesAndCartridges,
        Category::Inks,
        Category::Machines,
        Category::PowerSuppliesAndCables,
        Category::InkCaps,
        Category::Gloves,
        Category::BarrierMaterials,
        Category::AftercareCreams,
        Category::Pedals,
        Category::Tips,
        Category::Biosafety,
        Category::StencilMaterials,
        Category::BodyHygiene,
        Category::OtherCosmetics,
        Category::Uncategorized,
    ];

    /// The four sub-categories split out of the cosmetics umbrella label.
    pub const COSMETICS: [Category; 4] = [
        Category::StencilMaterials,
        Category::OtherCosmetics,
        Category::BodyHygiene,
        Category::AftercareCreams,
    ];

    /// Directory name and aggregate-file key.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Category::NeedlesAndCartridges => "agulhas_e_cartuchos",
            Category::Inks => "tintas",
            Category::Machines => "maquinas",
            Category::PowerSuppliesAndCables => "fontes_e_cabos",
            Category::InkCaps => "batoques",
            Category::Gloves => "luvas",
            Category::BarrierMaterials => "materiais_de_barreira",
            Category::AftercareCreams => "cremes_e_pos_tatuagem",
            Category::Pedals => "pedais",
            Category::Tips => "bicos_e_tips",
            Category::Biosafety => "biosseguranca_e_higiene",
            Category::StencilMaterials => "materiais_para_stencil",
            Category::BodyHygiene => "higiene_e_limpeza_corporal",
            Category::OtherCosmetics => "outros_cosmeticos",
            Category::Uncategorized => "outros",
        }
    }

    /// The `materialType` label that routes into this category.
    ///
    /// `None` for [`Category::Uncategorized`], which collects every label not
    /// in the table.
    #[must_use]
    pub fn material_type(self) -> Option<&'static str> {
        let label = match self {
            Category::NeedlesAndCartridges => "Agulhas e Cartuchos",
            Category::Inks => "Tintas",
            Category::Machines => "Máquinas",
            Category::PowerSuppliesAndCables => "Fontes e Cabos",
            Category::InkCaps => "Batoques",
            Category::Gloves => "Luvas",
            Category::BarrierMaterials => "Materiais de Barreira",
            Category::AftercareCreams => "Cremes e Pós-Tatuagem",
            Category::Pedals => "Pedais",
            Category::Tips => "Bicos e Tips",
            Category::Biosafety => "Biossegurança e Higiene",
            Category::StencilMaterials => "Materiais para Stencil",
            Category::BodyHygiene => "Higiene e Limpeza Corporal",
            Category::OtherCosmetics => "Outros Cosméticos",
            Category::Uncategorized => return None,
        };
        Some(label)
    }

    /// Routes a material type by exact match against the lookup table.
    #[must_use]
    pub fn from_material_type(material_type: &str) -> Category {
        Category::ALL
            .into_iter()
            .find(|c| c.material_type() == Some(material_type))
            .unwrap_or(Category::Uncategorized)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
