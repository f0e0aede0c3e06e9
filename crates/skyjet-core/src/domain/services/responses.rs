//! Canned assistant texts.
//!
//! Content is opaque to the engine: the `**bold**` markers, emoji and line
//! breaks are passed through for the host to render.

use crate::domain::models::ResponseCategory;

pub const DEFAULT_GREETING: &str =
    "¡Hola! Soy tu asistente IA especializado en vuelos privados. ¿En qué puedo ayudarte hoy?";

pub const DEFAULT_FALLBACK_REPLY: &str = "⏳ Estamos demorando más de lo habitual en responder.\n\nMientras tanto, puedes llamar a nuestra central 24/7 o intentar nuevamente en unos segundos.";

pub const DEFAULT_UNAVAILABLE_REPLY: &str =
    "⚠️ El asistente no está disponible en este momento. Por favor, intenta nuevamente más tarde.";

pub const ASSISTANT_TITLE: &str = "Asistente IA";
pub const INPUT_PLACEHOLDER: &str = "Escribe tu consulta...";
pub const QUICK_REPLIES_CAPTION: &str = "Preguntas frecuentes:";

const MEDICAL_EQUIPMENT: &str = "Para emergencias médicas, recomiendo:\n\n✈️ **Citation Medical** con:\n- UCI completa a bordo\n- Desfibrilador automático\n- Respirador portátil\n- Personal médico certificado\n\n💰 Precio estimado: $15,000 USD\n⏱️ Disponible en 30 minutos";

const MEDICAL_EMERGENCY: &str = "🚨 **PROTOCOLO DE EMERGENCIA ACTIVADO**\n\nTengo 3 ambulancias aéreas disponibles:\n\n1. **King Air Medical** - 15 min\n2. **Citation Medical** - 20 min\n3. **Helicopter Rescue** - 8 min\n\n¿Cuál es la ubicación del paciente?";

const MEDICAL_GENERAL: &str = "En vuelos médicos, puedo ayudarte con:\n\n🏥 Coordinación hospitalaria\n💊 Equipamiento especializado\n👨‍⚕️ Personal médico a bordo\n📞 Protocolos de emergencia\n\n¿Qué necesitas específicamente?";

const INCUCAI_ORGAN_TRANSPORT: &str = "🫀 **PROTOCOLO INCUCAI**\n\nPara trasplante de órganos:\n\n❄️ **Cadena de frío garantizada**\n📦 Contenedores especializados\n🔴 Prioridad absoluta en rutas aéreas\n📱 Tracking GPS en tiempo real\n\n⏰ **Tiempo crítico**: ¿Qué órgano necesitas transportar?";

const INCUCAI_ISCHEMIA_TIMES: &str = "⏱️ **TIEMPOS MÁXIMOS DE ISQUEMIA:**\n\n💓 Corazón: 4-6 horas\n🫁 Pulmón: 6-8 horas\n🫘 Riñón: 18-24 horas\n🫗 Hígado: 12-15 horas\n\nTenemos jets especializados listos 24/7. ¿Cuál es la urgencia?";

const INCUCAI_GENERAL: &str = "Para trasplantes INCUCAI ofrezco:\n\n🚁 Helicópteros para distancias cortas\n✈️ Jets para traslados interprovinciales\n❄️ Sistemas de preservación de órganos\n📋 Coordinación con hospitales\n\n¿Necesitas activar protocolo urgente?";

const EXECUTIVE_PRICING: &str = "💰 **ESTIMACIÓN DE PRECIOS:**\n\n🛩️ **Jet Ligero** (1-8 pax): $5,000-$12,000\n✈️ **Jet Mediano** (6-10 pax): $8,000-$18,000\n🛫 **Jet Pesado** (10-16 pax): $15,000-$35,000\n\n📍 ¿Cuál es tu ruta y fecha de viaje?";

const EXECUTIVE_EMPTY_LEGS: &str = "🎯 **EMPTY LEGS DISPONIBLES:**\n\n✈️ **Citation CJ3+**\nBuenos Aires → Mendoza\n💰 $7,200 (40% OFF)\n📅 Mañana 14:30\n\n🛩️ **King Air 350i**\nCórdoba → Buenos Aires  \n💰 $4,250 (50% OFF)\n📅 Pasado mañana 09:15\n\n¿Te interesa alguno?";

const EXECUTIVE_RECOMMENDATION: &str = "🎯 **RECOMENDACIONES PERSONALIZADAS:**\n\nPara elegir el jet perfecto necesito saber:\n\n👥 ¿Cuántos pasajeros?\n📍 ¿Ruta de vuelo?\n📅 ¿Fecha y horario?\n🍾 ¿Servicios especiales? (catering, WiFi, etc.)\n\n¡Cuéntame más detalles!";

const EXECUTIVE_GENERAL: &str = "¡Hola! Como experto en vuelos privados puedo ayudarte con:\n\n✈️ **Recomendaciones de aeronaves**\n💰 **Cotizaciones en tiempo real**\n🎯 **Empty legs con descuentos**\n🍾 **Servicios premium a bordo**\n📱 **Reservas inmediatas**\n\n¿Qué necesitas para tu próximo vuelo?";

pub fn response_text(category: ResponseCategory) -> &'static str {
    match category {
        ResponseCategory::MedicalEquipment => MEDICAL_EQUIPMENT,
        ResponseCategory::MedicalEmergency => MEDICAL_EMERGENCY,
        ResponseCategory::MedicalGeneral => MEDICAL_GENERAL,
        ResponseCategory::IncucaiOrganTransport => INCUCAI_ORGAN_TRANSPORT,
        ResponseCategory::IncucaiIschemiaTimes => INCUCAI_ISCHEMIA_TIMES,
        ResponseCategory::IncucaiGeneral => INCUCAI_GENERAL,
        ResponseCategory::ExecutivePricing => EXECUTIVE_PRICING,
        ResponseCategory::ExecutiveEmptyLegs => EXECUTIVE_EMPTY_LEGS,
        ResponseCategory::ExecutiveRecommendation => EXECUTIVE_RECOMMENDATION,
        ResponseCategory::ExecutiveGeneral => EXECUTIVE_GENERAL,
        ResponseCategory::Fallback => DEFAULT_FALLBACK_REPLY,
    }
}
