//! Fallback messages shown when the backend reports a failure without one.

pub const LOGIN: &str = "Error al iniciar sesión";
pub const LOGOUT: &str = "Error al cerrar sesión";
pub const CHANGE_PASSWORD: &str = "Error al cambiar la contraseña";
pub const REQUEST_SOFT_TOKEN: &str = "Error al solicitar el token";
pub const VALIDATE_SOFT_TOKEN: &str = "Error al validar el token";

pub const LIST_COMPLAINTS: &str = "Error al obtener reclamos";
pub const GET_COMPLAINT: &str = "Error al obtener el reclamo";
pub const CREATE_COMPLAINT: &str = "Error al crear el reclamo";
pub const UPDATE_COMPLAINT: &str = "Error al actualizar el reclamo";
pub const DELETE_COMPLAINT: &str = "Error al eliminar el reclamo";

pub const LIST_CORRESPONDENTS: &str = "Error al obtener corresponsales";
pub const CREATE_CORRESPONDENT: &str = "Error al crear el corresponsal";
pub const UPDATE_CORRESPONDENT: &str = "Error al actualizar el corresponsal";
pub const DELETE_CORRESPONDENT: &str = "Error al eliminar el corresponsal";
pub const UPLOAD_CORRESPONDENTS: &str = "Error al cargar el archivo";

pub const LIST_TRANSACTIONS: &str = "Error al obtener transacciones";
pub const GET_TRANSACTION: &str = "Error al obtener la transacción";
pub const EXPORT_TRANSACTIONS: &str = "Error al exportar transacciones";

pub const LIST_USERS: &str = "Error al obtener usuarios";
pub const CREATE_USER: &str = "Error al crear el usuario";
pub const UPDATE_USER: &str = "Error al actualizar el usuario";
pub const DELETE_USER: &str = "Error al eliminar el usuario";
pub const RESET_USER_PASSWORD: &str = "Error al restablecer la contraseña";

pub const LIST_GROUPS: &str = "Error al obtener grupos";
pub const CREATE_GROUP: &str = "Error al crear el grupo";
pub const UPDATE_GROUP: &str = "Error al actualizar el grupo";
pub const DELETE_GROUP: &str = "Error al eliminar el grupo";
pub const LIST_ROLES: &str = "Error al obtener roles";
pub const ASSIGN_GROUP_ROLES: &str = "Error al asignar roles";

pub const CONSOLIDATED_REPORT: &str = "Error al obtener el reporte consolidado";
pub const TRANSACTIONS_REPORT: &str = "Error al obtener el reporte de transacciones";
pub const COMPLAINTS_REPORT: &str = "Error al obtener el reporte de reclamos";
pub const AUDIT_LOG: &str = "Error al obtener la bitácora";
pub const LIST_CATALOG: &str = "Error al obtener el catálogo";
