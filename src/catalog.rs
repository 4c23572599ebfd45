//! The fixed category catalog. Loaded once, never mutated; summary output
//! follows this order.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryDef {
    pub key: &'static str,
    pub name: &'static str,
    /// Hex color, #RRGGBB.
    pub color: &'static str,
}

pub const CATALOG: &[CategoryDef] = &[
    CategoryDef { key: "purchases", name: "Compras", color: "#5636D3" },
    CategoryDef { key: "food", name: "Alimentação", color: "#FF872C" },
    CategoryDef { key: "salary", name: "Salário", color: "#12A454" },
    CategoryDef { key: "bills", name: "Contas", color: "#FFFF00" },
    CategoryDef { key: "car", name: "Carro", color: "#E83F5B" },
    CategoryDef { key: "leisure", name: "Lazer", color: "#26195C" },
    CategoryDef { key: "studies", name: "Estudos", color: "#9C001A" },
    CategoryDef { key: "others", name: "Outros", color: "#FF00FF" },
    CategoryDef { key: "investments", name: "Investimentos", color: "#CCFF33" },
];

pub fn find(key: &str) -> Option<&'static CategoryDef> {
    CATALOG.iter().find(|c| c.key == key)
}
