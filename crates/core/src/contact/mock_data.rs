//! Demo contacts for seeding a fresh database.

use super::types::NewContact;

/// A fixed set of demo contacts.
///
/// # Example
///
/// ```
/// use agenda_core::contact::demo_contacts;
///
/// let contacts = demo_contacts();
/// assert!(contacts.iter().all(|c| !c.name.is_empty()));
/// ```
pub fn demo_contacts() -> Vec<NewContact> {
    [
        ("Ana Souza", "ana.souza@example.com", "11987650001"),
        ("Bruno Lima", "bruno.lima@example.com", "21987650002"),
        ("Carla Mendes", "carla.mendes@example.com", "31987650003"),
        ("Diego Rocha", "diego.rocha@example.com", "41987650004"),
        ("Elisa Prado", "elisa.prado@example.com", "51987650005"),
        ("Fernando Alves", "fernando.alves@example.com", "61987650006"),
        ("Gabriela Nunes", "gabriela.nunes@example.com", "71987650007"),
        ("João Silva", "joao@example.com", "11999999999"),
    ]
    .into_iter()
    .map(|(name, email, phone)| NewContact::new(name, email, phone))
    .collect()
}
